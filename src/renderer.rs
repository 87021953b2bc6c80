//! The draw sequence: clear, depth test, viewport, bind, one indexed draw.

use crate::buffers::{create_buffers, create_fill_buffer, GeometryBuffers};
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::geometry::INDEX_FORMAT;
use crate::gpu::GpuContext;
use crate::pipeline::{create_depth_view, setup_shaders, TrianglePipeline};
use crate::shader::FILL_GROUP;

/// Everything needed to draw the triangle. GPU handles live as long as this
/// value; nothing is released explicitly.
pub struct TriangleRenderer {
    gpu: GpuContext,
    pipeline: TrianglePipeline,
    geometry: GeometryBuffers,
    fill_bind_group: wgpu::BindGroup,
    depth_view: Option<wgpu::TextureView>,
    clear_color: wgpu::Color,
}

impl TriangleRenderer {
    /// Create buffers, compile and link the shaders, and bind the fill color.
    pub fn new(gpu: GpuContext, config: &RenderConfig) -> RenderResult<Self> {
        let geometry = create_buffers(&gpu.device)?;
        let pipeline = setup_shaders(&gpu.device, gpu.format(), config.depth_test);

        let fill = create_fill_buffer(&gpu.device, config.fill_color);
        let fill_bind_group = pipeline.bind_fill(&gpu.device, &fill);

        let (width, height) = gpu.size();
        let depth_view = config
            .depth_test
            .then(|| create_depth_view(&gpu.device, width, height));

        Ok(Self {
            gpu,
            pipeline,
            geometry,
            fill_bind_group,
            depth_view,
            clear_color: config.wgpu_clear_color(),
        })
    }

    pub fn size(&self) -> (u32, u32) {
        self.gpu.size()
    }

    pub fn backend(&self) -> wgpu::Backend {
        self.gpu.backend
    }

    /// Record and submit the single draw, then present.
    pub fn draw(&self) -> RenderResult<()> {
        let output = self
            .gpu
            .surface
            .get_current_texture()
            .map_err(|e| RenderError::Frame(format!("Failed to get surface texture: {}", e)))?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Triangle Render Encoder"),
            });

        {
            let depth_stencil_attachment =
                self.depth_view
                    .as_ref()
                    .map(|depth| wgpu::RenderPassDepthStencilAttachment {
                        view: depth,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    });

            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Triangle Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            let (width, height) = self.gpu.size();
            pass.set_viewport(0.0, 0.0, width as f32, height as f32, 0.0, 1.0);

            pass.set_pipeline(&self.pipeline.pipeline);
            pass.set_bind_group(FILL_GROUP, &self.fill_bind_group, &[]);
            pass.set_vertex_buffer(0, self.geometry.vertex.slice(..));
            pass.set_index_buffer(self.geometry.index.slice(..), INDEX_FORMAT);
            pass.draw_indexed(0..self.geometry.index_count, 0, 0..1);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log::info!(
            "[TriangleRenderer] done ({} indices, depth test {})",
            self.geometry.index_count,
            self.pipeline.depth_test
        );
        Ok(())
    }
}
