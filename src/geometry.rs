//! Triangle geometry: vertex type, constant vertex/index arrays and layout.

use bytemuck::{Pod, Zeroable};

use crate::error::{RenderError, RenderResult};

/// Shader location of the `coordinates` attribute.
pub const COORDINATES_LOCATION: u32 = 0;

/// A single vertex position in clip space.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub coordinates: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![COORDINATES_LOCATION => Float32x3];

    /// Binds the vertex buffer to `coordinates`: 3 x f32, tightly packed, offset 0.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { coordinates: [-0.5, 0.5, 0.0] },
    Vertex { coordinates: [-0.5, -0.5, 0.0] },
    Vertex { coordinates: [0.5, -0.5, 0.0] },
];

pub const TRIANGLE_INDICES: [u16; 3] = [2, 1, 0];

/// Index format matching `TRIANGLE_INDICES`.
pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint16;

/// Ensure every index references an existing vertex slot.
pub fn validate_indices(vertices: &[Vertex], indices: &[u16]) -> RenderResult<()> {
    if indices.is_empty() {
        return Err(RenderError::InvalidGeometry("index list is empty".to_string()));
    }
    if indices.len() % 3 != 0 {
        return Err(RenderError::InvalidGeometry(format!(
            "index count {} is not a multiple of 3",
            indices.len()
        )));
    }
    match indices.iter().find(|&&i| i as usize >= vertices.len()) {
        Some(i) => Err(RenderError::InvalidGeometry(format!(
            "index {} out of range for {} vertices",
            i,
            vertices.len()
        ))),
        None => Ok(()),
    }
}
