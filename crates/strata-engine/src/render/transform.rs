//! The shared quad transform.
//!
//! Both entry points ([`bulk`](super::bulk) and [`single`](super::single)) reduce a
//! window to a normalized offset, a normalized size and a depth, then call
//! [`transform_quad`]. They differ only in where those inputs come from.

use glam::{Mat4, Vec2, Vec4};

/// Per-vertex result of either entry point.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct QuadOutput {
    /// Clip-space position.
    pub clip_position: Vec4,
    /// Quad-local texture coordinate, forwarded untouched.
    pub coord: Vec2,
    /// Resolved window index. Only the bulk path knows it.
    pub window_index: Option<u32>,
}

/// Normalizes a screen-space vector against the reference `extent`.
#[inline]
pub fn normalize(v: Vec2, extent: Vec2) -> Vec2 {
    debug_assert!(extent.x > 0.0 && extent.y > 0.0, "normalizing against an empty extent");
    v / extent
}

/// Places a unit-quad corner on the window rectangle, in `[0, 2]` space.
///
/// `loc = (0, 0)` lands on `2 * offset`; `loc = (1, 1)` on `2 * (offset + size)`.
#[inline]
pub fn adjusted_position(loc: Vec2, normalized_offset: Vec2, normalized_size: Vec2) -> Vec2 {
    loc * 2.0 * normalized_size + normalized_offset * 2.0
}

/// Maps a unit-quad corner to clip space.
#[inline]
pub fn transform_quad(
    loc: Vec2,
    normalized_offset: Vec2,
    normalized_size: Vec2,
    depth: f32,
    model: &Mat4,
) -> Vec4 {
    let adjusted = adjusted_position(loc, normalized_offset, normalized_size);
    *model * Vec4::new(adjusted.x, adjusted.y, depth, 1.0)
}
