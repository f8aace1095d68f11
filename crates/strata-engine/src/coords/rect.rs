use glam::IVec2;

/// Axis-aligned rectangle in integer screen units (top-left origin).
///
/// `start` is the upper left corner, `size` the distance to the lower right.
/// Sizes are expected to be non-negative; a zero-area rect is degenerate but valid
/// and simply composites as a zero-area quad.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub start: IVec2,
    pub size: IVec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            start: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Packs the rect as `[start.x, start.y, size.x, size.y]`, the `vec4<i32>`
    /// layout used by the GPU window records.
    #[inline]
    pub fn to_array(self) -> [i32; 4] {
        [self.start.x, self.start.y, self.size.x, self.size.y]
    }

    #[inline]
    pub fn from_array(a: [i32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_packing_order() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.to_array(), [1, 2, 3, 4]);
        assert_eq!(Rect::from_array([1, 2, 3, 4]), r);
    }

    #[test]
    fn new_splits_start_and_size() {
        let r = Rect::new(100, 50, 200, 100);
        assert_eq!(r.start, IVec2::new(100, 50));
        assert_eq!(r.size, IVec2::new(200, 100));
    }
}
