//! GPU context bound to a canvas: instance, surface, device and queue.

use wgpu::{CompositeAlphaMode, TextureFormat};

/// Owns the wgpu objects and the active surface configuration.
pub struct GpuContext {
    // Keep the `wgpu::Instance` alive for the lifetime of the surface/device.
    #[allow(dead_code)]
    instance: wgpu::Instance,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub backend: wgpu::Backend,
}

#[cfg(target_arch = "wasm32")]
impl GpuContext {
    /// Open a surface on the mounted canvas with the configured backend and
    /// configure it at the canvas size, clamped to the device limit.
    pub async fn new(
        target: crate::canvas::CanvasSurface,
        config: &crate::config::RenderConfig,
    ) -> crate::error::RenderResult<Self> {
        use crate::error::RenderError;

        let crate::canvas::CanvasSurface {
            canvas,
            width,
            height,
        } = target;
        let backends = config.backend.resolve(webgpu_available());
        log::debug!("[TriangleRenderer] Requesting backends {:?}", backends);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| RenderError::Surface(format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RenderError::AdapterNotFound(e.to_string()))?;

        let info = adapter.get_info();
        log::info!(
            "[TriangleRenderer] Using adapter {:?} ({:?})",
            info.name,
            info.backend
        );

        // Keep limits conservative so the WebGL2 path stays valid.
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("triangle-renderer device"),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                ..Default::default()
            })
            .await
            .map_err(|e| RenderError::Device(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        // Colors are stored as given, like WebGL's default framebuffer.
        let format = choose_surface_format(&caps.formats, false)
            .ok_or_else(|| RenderError::Surface("no supported surface formats".to_string()))?;

        let max_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) = clamp_extent(width, height, max_dimension);
        if width != canvas.width() || height != canvas.height() {
            log::warn!(
                "[TriangleRenderer] Canvas clamped to {}x{} (device limit {})",
                width,
                height,
                max_dimension
            );
            canvas.set_width(width);
            canvas.set_height(height);
        }

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: choose_alpha_mode(&caps.alpha_modes),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        log::debug!(
            "[TriangleRenderer] Surface configured: {:?} {:?} {}x{}",
            surface_config.format,
            surface_config.alpha_mode,
            surface_config.width,
            surface_config.height
        );

        Ok(Self {
            instance,
            surface,
            device,
            queue,
            config: surface_config,
            backend: info.backend,
        })
    }
}

impl GpuContext {
    pub fn format(&self) -> TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}

/// Whether the browser exposes `navigator.gpu`.
#[cfg(target_arch = "wasm32")]
fn webgpu_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window.navigator(), &wasm_bindgen::JsValue::from_str("gpu"))
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

/// Pick a format matching `prefer_srgb` when one is offered, else the first.
pub fn choose_surface_format(
    formats: &[TextureFormat],
    prefer_srgb: bool,
) -> Option<TextureFormat> {
    formats
        .iter()
        .find(|f| f.is_srgb() == prefer_srgb)
        .or_else(|| formats.first())
        .copied()
}

/// Keep each side within `[1, max_dimension]`; surfaces larger than the
/// device's texture limit fail to configure.
pub fn clamp_extent(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max_dimension = max_dimension.max(1);
    (
        width.clamp(1, max_dimension),
        height.clamp(1, max_dimension),
    )
}

/// Premultiplied alpha matches the canvas default; otherwise take what the
/// surface reports first.
pub fn choose_alpha_mode(modes: &[CompositeAlphaMode]) -> CompositeAlphaMode {
    if modes.contains(&CompositeAlphaMode::PreMultiplied) {
        return CompositeAlphaMode::PreMultiplied;
    }
    modes.first().copied().unwrap_or(CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_linear_format_when_asked() {
        let formats = [TextureFormat::Rgba8UnormSrgb, TextureFormat::Rgba8Unorm];
        assert_eq!(
            choose_surface_format(&formats, false),
            Some(TextureFormat::Rgba8Unorm)
        );
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(TextureFormat::Rgba8UnormSrgb)
        );
    }

    #[test]
    fn test_falls_back_to_first_format() {
        assert_eq!(
            choose_surface_format(&[TextureFormat::Bgra8UnormSrgb], false),
            Some(TextureFormat::Bgra8UnormSrgb)
        );
        assert_eq!(
            choose_surface_format(&[TextureFormat::Bgra8Unorm, TextureFormat::Rgba8Unorm], true),
            Some(TextureFormat::Bgra8Unorm)
        );
        assert_eq!(choose_surface_format(&[], false), None);
    }

    #[test]
    fn test_clamp_extent_to_device_limit() {
        assert_eq!(clamp_extent(800, 600, 2048), (800, 600));
        assert_eq!(clamp_extent(10_000, 600, 2048), (2048, 600));
        assert_eq!(clamp_extent(0, 0, 2048), (1, 1));
        assert_eq!(clamp_extent(5, 5, 0), (1, 1));
    }

    #[test]
    fn test_alpha_mode_choice() {
        assert_eq!(
            choose_alpha_mode(&[CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied]),
            CompositeAlphaMode::PreMultiplied
        );
        assert_eq!(
            choose_alpha_mode(&[CompositeAlphaMode::Opaque]),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&[]), CompositeAlphaMode::Auto);
    }
}
