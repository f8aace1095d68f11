//! Bulk (instanced) entry point.
//!
//! One instanced draw covers every window in the order list. Each instance resolves
//! its window through the order list, normalizes against the reference resolution in
//! [`ShaderConstants`] and takes its depth from the window index.

use crate::error::Result;
use crate::scene::{OrderList, WindowList};

use super::constants::ShaderConstants;
use super::depth::bulk_depth;
use super::layout::{QuadVertex, QUAD_VERTICES};
use super::transform::{normalize, transform_quad, QuadOutput};

/// Evaluates one vertex of bulk instance `instance`.
///
/// Fails if `instance` is not below the order list's count, or if the resolved index
/// is not in `windows`.
pub fn bulk_vertex(
    vertex: QuadVertex,
    instance: u32,
    windows: &WindowList,
    order: &OrderList,
    constants: &ShaderConstants,
) -> Result<QuadOutput> {
    let window_index = order.resolve(instance)?;
    let window = windows.get(window_index)?;

    let extent = constants.extent();
    let size = normalize(window.dims.size.as_vec2(), extent);
    let offset = normalize(window.dims.start.as_vec2(), extent);
    let depth = bulk_depth(window_index);

    Ok(QuadOutput {
        clip_position: transform_quad(
            vertex.loc.into(),
            offset,
            size,
            depth.get(),
            &constants.model(),
        ),
        coord: vertex.coord.into(),
        window_index: Some(window_index),
    })
}

/// Evaluates the whole instanced draw, one quad per instance in instance order
/// (back-to-front).
pub fn bulk_quads(
    windows: &WindowList,
    order: &OrderList,
    constants: &ShaderConstants,
) -> Result<Vec<[QuadOutput; 4]>> {
    order.validate_against(windows)?;

    (0..order.window_count())
        .map(|instance| {
            let mut quad = [QuadOutput::default(); 4];
            for (out, v) in quad.iter_mut().zip(QUAD_VERTICES) {
                *out = bulk_vertex(v, instance, windows, order, constants)?;
            }
            Ok(quad)
        })
        .collect()
}
