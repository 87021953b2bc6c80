//! Vertex, index and fill-color buffers.

use wgpu::util::DeviceExt;

use crate::error::RenderResult;
use crate::geometry::{validate_indices, TRIANGLE_INDICES, TRIANGLE_VERTICES};
use crate::shader::FillUniform;

/// GPU copies of the triangle geometry.
pub struct GeometryBuffers {
    pub vertex: wgpu::Buffer,
    pub index: wgpu::Buffer,
    pub index_count: u32,
}

/// Upload the constant vertex and index arrays.
///
/// The buffers are created with their contents; no later writes happen.
pub fn create_buffers(device: &wgpu::Device) -> RenderResult<GeometryBuffers> {
    validate_indices(&TRIANGLE_VERTICES, &TRIANGLE_INDICES)?;

    let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("triangle vertex buffer"),
        contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("triangle index buffer"),
        contents: bytemuck::cast_slice(&TRIANGLE_INDICES),
        usage: wgpu::BufferUsages::INDEX,
    });

    log::debug!(
        "[TriangleRenderer] Buffers created ({} vertices, {} indices)",
        TRIANGLE_VERTICES.len(),
        TRIANGLE_INDICES.len()
    );

    Ok(GeometryBuffers {
        vertex,
        index,
        index_count: TRIANGLE_INDICES.len() as u32,
    })
}

/// Uniform buffer holding the flat fill color.
pub fn create_fill_buffer(device: &wgpu::Device, color: [f32; 4]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("triangle fill uniform"),
        contents: bytemuck::bytes_of(&FillUniform { color }),
        usage: wgpu::BufferUsages::UNIFORM,
    })
}
