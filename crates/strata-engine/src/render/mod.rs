//! Surface transform and depth ordering.
//!
//! Two entry points place window quads in clip space:
//! - `bulk`: one instanced draw over the order list, depth from the window index
//! - `single`: one draw per window, depth from the recorder's running counter
//!
//! Both share [`transform_quad`]. The WGSL module in `shaders/surface.wgsl` mirrors
//! the CPU path so the two can be checked against each other.
//!
//! Convention:
//! - window rectangles are integer screen units, top-left origin, +Y down
//! - lower depth is further back; later paint lands at higher depth

mod buffers;
mod bulk;
mod constants;
mod depth;
mod images;
mod layout;
mod recorder;
mod single;
mod transform;

pub use buffers::{
    decode_order_list, decode_window_list, encode_order_list, encode_per_draw,
    encode_window_list, per_draw_offset, read_per_draw, ORDER_LIST_HEADER_SIZE,
    PER_DRAW_STRIDE, WINDOW_LIST_HEADER_SIZE,
};
pub use bulk::{bulk_quads, bulk_vertex};
pub use constants::{PerDrawConstants, ShaderConstants, WindowRecord, NO_IMAGE};
pub use depth::{bulk_depth, Depth, DepthCounter, DEPTH_EPSILON, DEPTH_SLOT_CAPACITY};
pub use images::{resolve_source, ImageSlots, ImageTable, SurfaceSource};
pub use layout::{
    bind_group_layout_entries, shader_module_descriptor, QuadVertex, BINDING_ORDER_LIST,
    BINDING_PER_DRAW, BINDING_SHADER_CONSTANTS, BINDING_WINDOW_LIST, QUAD_INDICES,
    QUAD_VERTICES, SURFACE_SHADER,
};
pub use recorder::{BulkSubmission, FrameRecorder, FrameSummary};
pub use single::{single_quad, single_vertex};
pub use transform::{adjusted_position, normalize, transform_quad, QuadOutput};
