//! Packed records shared with `shaders/surface.wgsl`.
//!
//! Every struct here is `#[repr(C)]` with explicit padding so its byte layout
//! matches the WGSL struct of the same role.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

use crate::coords::{ColorRgba, Rect, Viewport};
use crate::error::{CompositeError, Result};
use crate::scene::{ImageId, SurfaceContent, Window};

use super::depth::Depth;

/// Image id packed for color-filled windows. Never looked up.
pub const NO_IMAGE: i32 = -1;

/// One window as stored in the window list (64 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct WindowRecord {
    pub id: i32,
    pub use_color: u32,
    pub _pad: [u32; 2], // color is 16-byte aligned
    pub color: [f32; 4],
    pub dims: [i32; 4],
    pub opaque: [i32; 4],
}

impl WindowRecord {
    /// Unpacks the record, rejecting image windows without a usable id.
    pub fn to_window(&self) -> Result<Window> {
        let content = if self.use_color != 0 {
            SurfaceContent::Color(ColorRgba::from_array(self.color))
        } else {
            let id = u32::try_from(self.id).map_err(|_| CompositeError::MissingImage)?;
            SurfaceContent::Image(ImageId(id))
        };

        Ok(Window {
            content,
            dims: Rect::from_array(self.dims),
            opaque: Rect::from_array(self.opaque),
        })
    }
}

impl From<&Window> for WindowRecord {
    fn from(w: &Window) -> Self {
        let (id, use_color, color) = match w.content {
            SurfaceContent::Image(id) => {
                debug_assert!(id.0 <= i32::MAX as u32, "image id exceeds i32 range");
                (id.0 as i32, 0, [0.0; 4])
            }
            SurfaceContent::Color(c) => (NO_IMAGE, 1, c.to_array()),
        };

        Self {
            id,
            use_color,
            _pad: [0; 2],
            color,
            dims: w.dims.to_array(),
            opaque: w.opaque.to_array(),
        }
    }
}

/// Frame-global constants shared by both entry points (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShaderConstants {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
    /// Reference resolution used by the bulk path.
    pub width: f32,
    pub height: f32,
    pub _pad: [f32; 2],
}

impl ShaderConstants {
    pub fn new(model: Mat4, width: f32, height: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            width,
            height,
            _pad: [0.0; 2],
        }
    }

    #[inline]
    pub fn model(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Per-draw constants for the single-window path (96 bytes).
///
/// `width`/`height` are the draw viewport's size, which may be smaller than the
/// reference resolution in [`ShaderConstants`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PerDrawConstants {
    pub window: WindowRecord,
    pub viewport_offset: [f32; 2],
    pub width: f32,
    pub height: f32,
    pub starting_depth: f32,
    pub _pad: [f32; 3],
}

impl PerDrawConstants {
    pub fn new(window: &Window, viewport: &Viewport, starting_depth: Depth) -> Self {
        let offset = viewport.draw_offset();
        let size = viewport.draw_size();
        Self {
            window: WindowRecord::from(window),
            viewport_offset: offset.to_array(),
            width: size.x,
            height: size.y,
            starting_depth: starting_depth.get(),
            _pad: [0.0; 3],
        }
    }

    #[inline]
    pub fn viewport_offset(&self) -> Vec2 {
        Vec2::from_array(self.viewport_offset)
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn depth(&self) -> Depth {
        Depth(self.starting_depth)
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn record_layouts_match_wgsl() {
        assert_eq!(size_of::<WindowRecord>(), 64);
        assert_eq!(offset_of!(WindowRecord, color), 16);
        assert_eq!(offset_of!(WindowRecord, dims), 32);
        assert_eq!(offset_of!(WindowRecord, opaque), 48);

        assert_eq!(size_of::<ShaderConstants>(), 80);
        assert_eq!(offset_of!(ShaderConstants, width), 64);

        assert_eq!(size_of::<PerDrawConstants>(), 96);
        assert_eq!(offset_of!(PerDrawConstants, viewport_offset), 64);
        assert_eq!(offset_of!(PerDrawConstants, starting_depth), 80);
    }

    #[test]
    fn color_window_packs_sentinel_id() {
        let w = Window::color(ColorRgba::new(1.0, 0.5, 0.0, 1.0), Rect::new(1, 2, 3, 4));
        let rec = WindowRecord::from(&w);
        assert_eq!(rec.id, NO_IMAGE);
        assert_eq!(rec.use_color, 1);
        assert_eq!(rec.color, [1.0, 0.5, 0.0, 1.0]);
        assert_eq!(rec.dims, [1, 2, 3, 4]);
        assert_eq!(rec.to_window().unwrap(), w);
    }

    #[test]
    fn image_record_without_id_is_rejected() {
        let mut rec = WindowRecord::from(&Window::image(ImageId(9), Rect::new(0, 0, 8, 8)));
        assert_eq!(rec.id, 9);
        rec.id = NO_IMAGE;
        assert_eq!(rec.to_window(), Err(CompositeError::MissingImage));
    }

    #[test]
    fn per_draw_takes_viewport_scroll_and_size() {
        let mut vp = Viewport::new(100, 100, 400, 300);
        vp.set_scroll_region(400, 900);
        vp.update_scroll_amount(0, 120);

        let w = Window::image(ImageId(1), Rect::new(10, 20, 30, 40));
        let pd = PerDrawConstants::new(&w, &vp, Depth::from_slot(3));

        assert_eq!(pd.viewport_offset(), Vec2::new(0.0, -120.0));
        assert_eq!(pd.extent(), Vec2::new(400.0, 300.0));
        assert_eq!(pd.depth(), Depth::from_slot(3));
    }

    #[test]
    fn shader_constants_round_trip_model() {
        let m = crate::config::top_left_model();
        let c = ShaderConstants::new(m, 800.0, 600.0);
        assert_eq!(c.model(), m);
        assert_eq!(c.extent(), Vec2::new(800.0, 600.0));
    }
}
