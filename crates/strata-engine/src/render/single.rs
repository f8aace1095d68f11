//! Single-window entry point.
//!
//! Each draw carries one window in [`PerDrawConstants`]. The window is offset by the
//! viewport scroll, normalized against the draw viewport, and placed at the
//! caller-supplied starting depth.

use glam::Mat4;

use crate::coords::Rect;

use super::constants::PerDrawConstants;
use super::layout::{QuadVertex, QUAD_VERTICES};
use super::transform::{normalize, transform_quad, QuadOutput};

pub fn single_vertex(
    vertex: QuadVertex,
    draw: &PerDrawConstants,
    model: &Mat4,
) -> QuadOutput {
    let dims = Rect::from_array(draw.window.dims);
    let extent = draw.extent();
    let position = dims.start.as_vec2() + draw.viewport_offset();

    QuadOutput {
        clip_position: transform_quad(
            vertex.loc.into(),
            normalize(position, extent),
            normalize(dims.size.as_vec2(), extent),
            draw.starting_depth,
            model,
        ),
        coord: vertex.coord.into(),
        window_index: None,
    }
}

/// All four corners of one single-window draw.
pub fn single_quad(draw: &PerDrawConstants, model: &Mat4) -> [QuadOutput; 4] {
    QUAD_VERTICES.map(|v| single_vertex(v, draw, model))
}
