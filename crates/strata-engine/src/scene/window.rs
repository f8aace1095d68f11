use crate::coords::{ColorRgba, Rect};

/// Stable handle into the image table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u32);

impl ImageId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a surface is filled with.
///
/// Packed records flatten this into `use_color` + `id` + `color`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SurfaceContent {
    /// Sample the texture stored at this image table slot.
    Image(ImageId),
    /// Fill with a flat color.
    Color(ColorRgba),
}

/// One compositable surface.
///
/// Window records are produced by the frame driver and only read by the core.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Window {
    pub content: SurfaceContent,
    /// On-screen position and size, in the same units as the viewport.
    pub dims: Rect,
    /// Sub-region guaranteed fully opaque. Carried for occlusion consumers only.
    pub opaque: Rect,
}

impl Window {
    #[inline]
    pub const fn new(content: SurfaceContent, dims: Rect) -> Self {
        Self {
            content,
            dims,
            opaque: Rect::new(0, 0, 0, 0),
        }
    }

    #[inline]
    pub const fn image(id: ImageId, dims: Rect) -> Self {
        Self::new(SurfaceContent::Image(id), dims)
    }

    #[inline]
    pub const fn color(color: ColorRgba, dims: Rect) -> Self {
        Self::new(SurfaceContent::Color(color), dims)
    }

    #[inline]
    pub const fn with_opaque(mut self, opaque: Rect) -> Self {
        self.opaque = opaque;
        self
    }

    #[inline]
    pub fn use_color(&self) -> bool {
        matches!(self.content, SurfaceContent::Color(_))
    }

    #[inline]
    pub fn image_id(&self) -> Option<ImageId> {
        match self.content {
            SurfaceContent::Image(id) => Some(id),
            SurfaceContent::Color(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_selects_mode() {
        let dims = Rect::new(0, 0, 10, 10);
        let img = Window::image(ImageId(3), dims);
        let flat = Window::color(ColorRgba::black(), dims);

        assert!(!img.use_color());
        assert_eq!(img.image_id(), Some(ImageId(3)));
        assert!(flat.use_color());
        assert_eq!(flat.image_id(), None);
    }

    #[test]
    fn opaque_defaults_to_empty() {
        let w = Window::image(ImageId(0), Rect::new(5, 5, 10, 10));
        assert_eq!(w.opaque, Rect::default());

        let w = w.with_opaque(Rect::new(5, 5, 10, 8));
        assert_eq!(w.opaque, Rect::new(5, 5, 10, 8));
    }
}
