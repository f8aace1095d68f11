//! GPU-facing layout contract: the unit quad, the WGSL module and the bindings it
//! expects.
//!
//! Pipeline creation and buffer allocation belong to the caller; this module only
//! describes what they must agree with.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use super::buffers::{ORDER_LIST_HEADER_SIZE, WINDOW_LIST_HEADER_SIZE};
use super::constants::{PerDrawConstants, ShaderConstants, WindowRecord};

/// WGSL source implementing `vs_bulk` and `vs_single`.
pub const SURFACE_SHADER: &str = include_str!("shaders/surface.wgsl");

pub const BINDING_SHADER_CONSTANTS: u32 = 0;
pub const BINDING_WINDOW_LIST: u32 = 1;
pub const BINDING_ORDER_LIST: u32 = 2;
pub const BINDING_PER_DRAW: u32 = 3;

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub loc: [f32; 2],   // unit-quad corner, 0..1
    pub coord: [f32; 2], // texture coordinate, passed through
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // loc
        1 => Float32x2  // coord
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { loc: [0.0, 0.0], coord: [0.0, 0.0] },
    QuadVertex { loc: [1.0, 0.0], coord: [1.0, 0.0] },
    QuadVertex { loc: [1.0, 1.0], coord: [1.0, 1.0] },
    QuadVertex { loc: [0.0, 1.0], coord: [0.0, 1.0] },
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── bindings ──────────────────────────────────────────────────────────────

fn min_binding_size(bytes: usize) -> NonZeroU64 {
    NonZeroU64::new(bytes as u64)
        .expect("binding layouts have non-zero size by construction")
}

fn buffer_entry(
    binding: u32,
    ty: wgpu::BufferBindingType,
    has_dynamic_offset: bool,
    min_size: usize,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty,
            has_dynamic_offset,
            min_binding_size: Some(min_binding_size(min_size)),
        },
        count: None,
    }
}

/// Bind group layout entries matching `shaders/surface.wgsl`.
///
/// The storage lists are sized for their header plus one element, which is the
/// minimum WGSL accepts for a runtime-sized array. The per-draw uniform is bound
/// with a dynamic offset (see [`super::buffers::per_draw_offset`]).
pub fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 4] {
    [
        buffer_entry(
            BINDING_SHADER_CONSTANTS,
            wgpu::BufferBindingType::Uniform,
            false,
            std::mem::size_of::<ShaderConstants>(),
        ),
        buffer_entry(
            BINDING_WINDOW_LIST,
            wgpu::BufferBindingType::Storage { read_only: true },
            false,
            WINDOW_LIST_HEADER_SIZE + std::mem::size_of::<WindowRecord>(),
        ),
        buffer_entry(
            BINDING_ORDER_LIST,
            wgpu::BufferBindingType::Storage { read_only: true },
            false,
            ORDER_LIST_HEADER_SIZE + std::mem::size_of::<i32>(),
        ),
        buffer_entry(
            BINDING_PER_DRAW,
            wgpu::BufferBindingType::Uniform,
            true,
            std::mem::size_of::<PerDrawConstants>(),
        ),
    ]
}

pub fn shader_module_descriptor() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("strata surface shader"),
        source: wgpu::ShaderSource::Wgsl(SURFACE_SHADER.into()),
    }
}
