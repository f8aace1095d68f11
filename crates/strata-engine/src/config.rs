use glam::{Mat4, Vec3};

use crate::render::DEPTH_SLOT_CAPACITY;

/// Compositor configuration.
///
/// Keep this structure small. Everything here is read once per frame by the
/// [`FrameRecorder`](crate::render::FrameRecorder).
#[derive(Debug, Clone, PartialEq)]
pub struct CompositorConfig {
    /// Depth slot the running counter returns to at the start of every frame.
    pub depth_baseline: u32,

    /// Number of depth slots after which a frame is reported as exhausted.
    ///
    /// Defaults to [`DEPTH_SLOT_CAPACITY`]; lowering it surfaces the warning earlier.
    pub depth_slot_limit: u32,

    /// Model matrix applied after normalization.
    ///
    /// Normalized coordinates arrive in `[0, 2]` with a top-left origin; the
    /// default maps them onto clip space with +Y up.
    pub model: Mat4,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            depth_baseline: 0,
            depth_slot_limit: DEPTH_SLOT_CAPACITY,
            model: top_left_model(),
        }
    }
}

/// Maps `[0, 2]²` (top-left origin, +Y down) onto `[-1, 1]²` clip space (+Y up).
///
/// Depth is passed through unchanged.
pub fn top_left_model() -> Mat4 {
    Mat4::from_translation(Vec3::new(-1.0, 1.0, 0.0)) * Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn top_left_model_maps_corners() {
        let m = top_left_model();
        assert_eq!(
            m * Vec4::new(0.0, 0.0, 0.5, 1.0),
            Vec4::new(-1.0, 1.0, 0.5, 1.0)
        );
        assert_eq!(
            m * Vec4::new(2.0, 2.0, 0.5, 1.0),
            Vec4::new(1.0, -1.0, 0.5, 1.0)
        );
    }

    #[test]
    fn default_limit_is_capacity() {
        let c = CompositorConfig::default();
        assert_eq!(c.depth_baseline, 0);
        assert_eq!(c.depth_slot_limit, DEPTH_SLOT_CAPACITY);
    }
}
