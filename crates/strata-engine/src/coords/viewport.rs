use glam::{IVec2, Vec2};

/// A region of the output to composite into.
///
/// Single-window draws are normalized against `size` rather than the full output
/// resolution, so a viewport can host its own scrolled set of surfaces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Position of the viewport on the output.
    pub offset: IVec2,
    /// Size of the viewport within the output.
    pub size: IVec2,
    /// Maximum bounds within which `scroll_offset` may move.
    pub scroll_region: IVec2,
    /// Translation applied to every surface drawn in this viewport.
    ///
    /// Always within `[-(scroll_region - size), 0]` on each axis.
    pub scroll_offset: IVec2,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            offset: IVec2::new(x, y),
            size: IVec2::new(width, height),
            scroll_region: IVec2::new(width, height),
            scroll_offset: IVec2::ZERO,
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.size.x > 0 && self.size.y > 0
    }

    /// Updates the valid scrolling region within this viewport.
    pub fn set_scroll_region(&mut self, x: i32, y: i32) {
        self.scroll_region = IVec2::new(x, y);
    }

    /// Scrolls the contents by `(dx, dy)`.
    ///
    /// The scroll region moves, not the viewport, so the offset lives in
    /// `[-(region - size), 0]` and is clamped to it.
    pub fn update_scroll_amount(&mut self, dx: i32, dy: i32) {
        let min = -(self.scroll_region - self.size);
        let wanted = self.scroll_offset - IVec2::new(dx, dy);

        // A region smaller than the viewport leaves nothing to scroll.
        self.scroll_offset = IVec2::new(
            wanted.x.clamp(min.x.min(0), 0),
            wanted.y.clamp(min.y.min(0), 0),
        );
    }

    /// Offset added to surface positions for per-draw constants.
    #[inline]
    pub fn draw_offset(self) -> Vec2 {
        self.scroll_offset.as_vec2()
    }

    /// Viewport size used to normalize single-window draws.
    #[inline]
    pub fn draw_size(self) -> Vec2 {
        self.size.as_vec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_viewport_has_no_scroll() {
        let v = Viewport::new(10, 20, 800, 600);
        assert_eq!(v.scroll_region, IVec2::new(800, 600));
        assert_eq!(v.scroll_offset, IVec2::ZERO);
        assert!(v.is_valid());
    }

    #[test]
    fn scroll_clamps_to_region() {
        let mut v = Viewport::new(0, 0, 100, 100);
        v.set_scroll_region(100, 300);

        v.update_scroll_amount(0, 50);
        assert_eq!(v.scroll_offset, IVec2::new(0, -50));

        // Past the end of the region.
        v.update_scroll_amount(0, 1000);
        assert_eq!(v.scroll_offset, IVec2::new(0, -200));

        // Back past the start.
        v.update_scroll_amount(0, -5000);
        assert_eq!(v.scroll_offset, IVec2::ZERO);
    }

    #[test]
    fn scroll_without_region_is_noop() {
        let mut v = Viewport::new(0, 0, 100, 100);
        v.update_scroll_amount(30, 30);
        assert_eq!(v.scroll_offset, IVec2::ZERO);
    }

    #[test]
    fn draw_offset_follows_scroll() {
        let mut v = Viewport::new(0, 0, 100, 100);
        v.set_scroll_region(400, 100);
        v.update_scroll_amount(25, 0);
        assert_eq!(v.draw_offset(), Vec2::new(-25.0, 0.0));
        assert_eq!(v.draw_size(), Vec2::new(100.0, 100.0));
    }
}
