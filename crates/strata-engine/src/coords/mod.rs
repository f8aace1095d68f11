//! Coordinate and geometry types shared by the scene and the transform stages.
//!
//! Canonical CPU space:
//! - Integer screen units
//! - Origin top-left
//! - +X right, +Y down
//!
//! Transforms normalize against a viewport and then apply the model matrix.

mod color;
mod rect;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use viewport::Viewport;
