use winit::dpi;

/// Placement of the scaled scene inside the window. Everything outside the
/// rectangle is letterbox bar.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub scale: f32,
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl Viewport {
    pub fn new(scene: crate::SceneSize, window: dpi::PhysicalSize<u32>) -> Self {
        let scale_x = window.width as f32 / scene.width as f32;
        let scale_y = window.height as f32 / scene.height as f32;
        let scale = scale_x.min(scale_y);

        let width = scale * scene.width as f32;
        let height = scale * scene.height as f32;

        let x = (window.width as f32 - width) / 2.;
        let y = (window.height as f32 - height) / 2.;

        Self { scale, width, height, x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(width: u32, height: u32) -> dpi::PhysicalSize<u32> {
        dpi::PhysicalSize::new(width, height)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-3, "{} != {}", actual, expected);
    }

    #[test]
    fn window_matching_the_scene_aspect_fits_exactly() {
        let viewport = Viewport::new(crate::SceneSize::new(320, 180), window(1280, 720));

        assert_close(viewport.scale, 4.);
        assert_close(viewport.width, 1280.);
        assert_close(viewport.height, 720.);
        assert_close(viewport.x, 0.);
        assert_close(viewport.y, 0.);
    }

    #[test]
    fn square_window_letterboxes_a_wide_scene() {
        let viewport = Viewport::new(crate::SceneSize::new(320, 180), window(1000, 1000));

        assert_close(viewport.scale, 3.125);
        assert_close(viewport.width, 1000.);
        assert_close(viewport.height, 562.5);
        assert_close(viewport.x, 0.);
        assert_close(viewport.y, 218.75);
    }

    #[test]
    fn square_scene_in_a_square_window_has_no_bars() {
        let viewport = Viewport::new(crate::SceneSize::new(100, 100), window(500, 500));

        assert_close(viewport.scale, 5.);
        assert_close(viewport.x, 0.);
        assert_close(viewport.y, 0.);
    }

    #[test]
    fn wide_window_puts_bars_left_and_right() {
        let viewport = Viewport::new(crate::SceneSize::new(320, 180), window(2000, 720));

        assert_close(viewport.scale, 4.);
        assert_close(viewport.y, 0.);
        assert!(viewport.x > 0.);
    }

    #[test]
    fn tall_window_puts_bars_top_and_bottom() {
        let viewport = Viewport::new(crate::SceneSize::new(320, 180), window(1280, 2000));

        assert_close(viewport.scale, 4.);
        assert_close(viewport.x, 0.);
        assert!(viewport.y > 0.);
    }

    #[test]
    fn scene_is_centered_for_any_window() {
        let scene = crate::SceneSize::new(320, 180);

        for (w, h) in [(123, 456), (1920, 1080), (50, 3000), (3000, 50)] {
            let viewport = Viewport::new(scene, window(w, h));

            assert_close(viewport.x * 2. + viewport.width, w as f32);
            assert_close(viewport.y * 2. + viewport.height, h as f32);
        }
    }

    #[test]
    fn scale_is_uniform_in_both_axes() {
        let viewport = Viewport::new(crate::SceneSize::new(320, 180), window(777, 333));

        assert_close(viewport.width / 320., viewport.height / 180.);
    }
}
