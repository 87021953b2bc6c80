//! Shader compilation and program linking.
//!
//! wgpu has no separate shader objects: both stages live in one WGSL module
//! and are linked when the render pipeline is created. The vertex layout is
//! where the vertex buffer gets bound to the `coordinates` attribute.

use crate::geometry::Vertex;
use crate::shader::{FILL_BINDING, FRAGMENT_ENTRY, TRIANGLE_SHADER, VERTEX_ENTRY};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Linked program plus the layout its fill-color bind group must follow.
pub struct TrianglePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub fill_layout: wgpu::BindGroupLayout,
    pub depth_test: bool,
}

/// Depth state for the pipeline; `None` disables the depth test.
pub fn depth_stencil_state(depth_test: bool) -> Option<wgpu::DepthStencilState> {
    depth_test.then(|| wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    })
}

pub fn setup_shaders(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    depth_test: bool,
) -> TrianglePipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("triangle shader"),
        source: wgpu::ShaderSource::Wgsl(TRIANGLE_SHADER.into()),
    });

    let fill_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("triangle fill bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: FILL_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("triangle pipeline layout"),
        bind_group_layouts: &[&fill_layout],
        immediate_size: 0,
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("triangle pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(VERTEX_ENTRY),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(FRAGMENT_ENTRY),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: depth_stencil_state(depth_test),
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    log::debug!(
        "[TriangleRenderer] Program linked ({:?}, depth test {})",
        format,
        depth_test
    );

    TrianglePipeline {
        pipeline,
        fill_layout,
        depth_test,
    }
}

impl TrianglePipeline {
    pub fn bind_fill(&self, device: &wgpu::Device, fill: &wgpu::Buffer) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("triangle fill bind group"),
            layout: &self.fill_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: FILL_BINDING,
                resource: fill.as_entire_binding(),
            }],
        })
    }
}

/// Depth attachment sized to the surface.
pub fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("triangle depth texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
