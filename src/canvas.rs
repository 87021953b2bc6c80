//! Canvas creation and mounting.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult, ResultExt};

/// A canvas attached to the page, with the size it was given.
pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub width: u32,
    pub height: u32,
}

/// Create `config.canvas_id`, append it to `config.mount_id` and size it
/// to the client size of `config.size_source_id`.
pub fn add_canvas(config: &RenderConfig) -> RenderResult<CanvasSurface> {
    let window = web_sys::window().ok_or(RenderError::NoWindow)?;
    let document = window.document().ok_or(RenderError::NoDocument)?;

    let mount = element_by_id(&document, &config.mount_id)?;
    let size_source = element_by_id(&document, &config.size_source_id)?;
    let (width, height) = canvas_extent(size_source.client_width(), size_source.client_height());

    let canvas = document
        .create_element("canvas")
        .map_err(|e| RenderError::Dom(format!("create canvas: {:?}", e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| RenderError::Dom("created element is not a canvas".to_string()))?;
    canvas.set_id(&config.canvas_id);
    mount
        .append_child(&canvas)
        .context("append canvas to mount element")?;
    canvas.set_width(width);
    canvas.set_height(height);

    log::debug!(
        "[TriangleRenderer] Canvas #{} mounted in #{} ({}x{})",
        config.canvas_id,
        config.mount_id,
        width,
        height
    );

    Ok(CanvasSurface {
        canvas,
        width,
        height,
    })
}

fn element_by_id(document: &Document, id: &str) -> RenderResult<web_sys::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| RenderError::ElementNotFound { id: id.to_string() })
}

/// Canvas size from a DOM client size. Surfaces cannot be configured at 0x0,
/// so each side is at least one pixel.
pub fn canvas_extent(client_width: i32, client_height: i32) -> (u32, u32) {
    (
        client_width.max(1) as u32,
        client_height.max(1) as u32,
    )
}
