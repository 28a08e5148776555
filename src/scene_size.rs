/// The fixed resolution the scene renders at, independent of window size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SceneSize {
    pub width: u32,
    pub height: u32,
}

impl SceneSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d { width: self.width, height: self.height, depth_or_array_layers: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_is_width_over_height() {
        assert_eq!(SceneSize::new(320, 180).aspect(), 320. / 180.);
        assert_eq!(SceneSize::new(100, 100).aspect(), 1.);
    }

    #[test]
    fn extent_is_a_single_layer() {
        let extent = SceneSize::new(320, 180).extent();

        assert_eq!(extent.width, 320);
        assert_eq!(extent.height, 180);
        assert_eq!(extent.depth_or_array_layers, 1);
    }
}
