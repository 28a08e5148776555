#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FilterMode {
    Linear,
    Nearest,
}

impl FilterMode {
    pub fn from_smooth_scaling(smooth_scaling: bool) -> Self {
        if smooth_scaling { Self::Linear } else { Self::Nearest }
    }

    pub fn to_wgpu(&self) -> wgpu::FilterMode {
        match self {
            Self::Linear => wgpu::FilterMode::Linear,
            Self::Nearest => wgpu::FilterMode::Nearest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_scaling_selects_bilinear_filtering() {
        assert_eq!(FilterMode::from_smooth_scaling(true), FilterMode::Linear);
        assert_eq!(FilterMode::from_smooth_scaling(false), FilterMode::Nearest);
    }
}
