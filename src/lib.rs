//! WASM Triangle Renderer
//!
//! Draws one flat-colored triangle into a freshly created canvas using wgpu
//! (WebGL2 by default, WebGPU on request). The whole program is a single
//! setup-and-draw pass: mount the canvas, upload a vertex and an index
//! buffer, compile and link the shader pair, issue one indexed draw.

pub mod buffers;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gpu;
pub mod logging;
pub mod pipeline;
pub mod renderer;
pub mod shader;

pub use config::{BackendPreference, LogLevel, RenderConfig};
pub use error::{RenderError, RenderResult};
pub use renderer::TriangleRenderer;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and logging for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    logging::init_logging(log::Level::Info);
    log::info!("[TriangleRenderer] WASM module initialized");
}

/// Triangle renderer attached to a canvas it created itself
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct WasmTriangleRenderer {
    renderer: TriangleRenderer,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl WasmTriangleRenderer {
    /// Mount a canvas and prepare buffers and shaders. `config` may be
    /// `undefined` for the defaults.
    #[wasm_bindgen]
    pub async fn create(config: JsValue) -> Result<WasmTriangleRenderer, JsValue> {
        let config = RenderConfig::from_js(config)?;
        logging::set_level(config.log_level.into());
        log::info!(
            "[TriangleRenderer] Creating renderer (canvas #{}, backend {:?})",
            config.canvas_id,
            config.backend
        );

        let surface = canvas::add_canvas(&config)?;
        let gpu = gpu::GpuContext::new(surface, &config).await?;
        let renderer = TriangleRenderer::new(gpu, &config)?;

        let (width, height) = renderer.size();
        log::info!(
            "[TriangleRenderer] Renderer created successfully ({}x{})",
            width,
            height
        );
        Ok(WasmTriangleRenderer { renderer })
    }

    /// Issue the single indexed draw and present it.
    ///
    /// Buffers, program and colors never change, so calling this again
    /// re-presents the same frame rather than adding draw calls.
    #[wasm_bindgen]
    pub fn draw(&self) -> Result<(), JsValue> {
        self.renderer.draw().map_err(JsValue::from)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.renderer.size().0
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.renderer.size().1
    }

    /// Backend the surface was opened with, e.g. `"Gl"` or `"BrowserWebGpu"`.
    #[wasm_bindgen(getter)]
    pub fn backend(&self) -> String {
        format!("{:?}", self.renderer.backend())
    }
}

/// Create a renderer and draw once. Keep the returned value alive for as
/// long as the canvas should stay valid.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = drawTriangle)]
pub async fn draw_triangle(config: JsValue) -> Result<WasmTriangleRenderer, JsValue> {
    let renderer = WasmTriangleRenderer::create(config).await?;
    renderer.draw()?;
    Ok(renderer)
}
