#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use triangle_renderer_wasm::canvas::add_canvas;
use triangle_renderer_wasm::{draw_triangle, BackendPreference, RenderConfig, RenderError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .expect("window")
        .document()
        .expect("document")
}

fn mount(id: &str) -> web_sys::Element {
    let document = document();
    let el = document.create_element("div").expect("create div");
    el.set_id(id);
    document
        .body()
        .expect("body")
        .append_child(&el)
        .expect("append mount");
    el
}

fn sized_mount(id: &str, size_px: u32) -> web_sys::Element {
    let el = mount(id);
    el.set_attribute("style", &format!("width: {size_px}px; height: {size_px}px"))
        .expect("set style");
    el
}

fn canvas_by_id(id: &str) -> web_sys::HtmlCanvasElement {
    document()
        .get_element_by_id(id)
        .expect("canvas in DOM")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("is a canvas")
}

/// Copy `canvas` into a 2D canvas and read one RGBA pixel (unpremultiplied).
fn read_pixel(canvas: &web_sys::HtmlCanvasElement, x: f64, y: f64) -> [u8; 4] {
    let copy = document()
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("is a canvas");
    copy.set_width(canvas.width());
    copy.set_height(canvas.height());

    let ctx = copy
        .get_context("2d")
        .expect("get_context")
        .expect("2d context")
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .expect("is a 2d context");
    ctx.draw_image_with_html_canvas_element(canvas, 0.0, 0.0)
        .expect("drawImage");
    let data = ctx.get_image_data(x, y, 1.0, 1.0).expect("getImageData").data();
    [data[0], data[1], data[2], data[3]]
}

#[wasm_bindgen_test]
async fn draw_triangle_renders_blue_triangle_on_grey() {
    sized_mount("draw-app", 64);
    let obj = Object::new();
    for (key, value) in [
        ("mountId", "draw-app"),
        ("sizeSourceId", "draw-app"),
        ("canvasId", "draw-canvas"),
        ("backend", "webgl"),
    ] {
        Reflect::set(&obj, &key.into(), &value.into()).unwrap();
    }

    let renderer = draw_triangle(obj.into())
        .await
        .expect("drawTriangle should succeed");
    assert_eq!(renderer.width(), 64);
    assert_eq!(renderer.height(), 64);
    assert_eq!(renderer.backend(), "Gl");

    let canvas = canvas_by_id("draw-canvas");

    // Clip-space (-0.25, -0.25) lies inside the lower-left triangle.
    let inside = read_pixel(&canvas, 24.0, 40.0);
    assert!(
        inside[2] > 200 && inside[0] < 40 && inside[1] < 40,
        "expected blue inside the triangle, got {inside:?}"
    );

    // Top-left corner shows the clear color. A linear 0.5 stays near the
    // middle of the byte range; sRGB encoding would push it above 180.
    let outside = read_pixel(&canvas, 2.0, 2.0);
    let [r, g, b, _] = outside;
    assert!(
        r.abs_diff(g) <= 2 && r.abs_diff(b) <= 2,
        "expected grey outside the triangle, got {outside:?}"
    );
    assert!(
        (110..=165).contains(&r),
        "clear color should be stored linearly, got {outside:?}"
    );

    // Re-presenting the same frame is allowed.
    assert!(renderer.draw().is_ok());
}

#[wasm_bindgen_test]
fn add_canvas_mounts_canvas_with_id() {
    let app = mount("test-app");
    let config = RenderConfig {
        mount_id: "test-app".to_string(),
        size_source_id: "test-app".to_string(),
        canvas_id: "test-canvas".to_string(),
        ..Default::default()
    };

    let surface = add_canvas(&config).expect("canvas should mount");

    let found = canvas_by_id("test-canvas");
    assert_eq!(found.parent_element().map(|p| p.id()), Some(app.id()));
    assert!(surface.width >= 1 && surface.height >= 1);
    assert_eq!(found.width(), surface.width);
    assert_eq!(found.height(), surface.height);
}

#[wasm_bindgen_test]
fn add_canvas_reports_missing_mount() {
    let config = RenderConfig {
        mount_id: "does-not-exist".to_string(),
        ..Default::default()
    };

    match add_canvas(&config) {
        Err(RenderError::ElementNotFound { id }) => assert_eq!(id, "does-not-exist"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected missing mount element"),
    }
}

#[wasm_bindgen_test]
fn config_decodes_from_js_object() {
    let obj = Object::new();
    Reflect::set(&obj, &"canvasId".into(), &"from-js".into()).unwrap();
    Reflect::set(&obj, &"backend".into(), &"auto".into()).unwrap();
    Reflect::set(&obj, &"depthTest".into(), &JsValue::FALSE).unwrap();

    let config = RenderConfig::from_js(obj.into()).expect("valid config");
    assert_eq!(config.canvas_id, "from-js");
    assert_eq!(config.backend, BackendPreference::Auto);
    assert!(!config.depth_test);
    assert_eq!(config.mount_id, "app");
}

#[wasm_bindgen_test]
fn config_defaults_from_undefined() {
    let config = RenderConfig::from_js(JsValue::UNDEFINED).expect("defaults");
    assert_eq!(config, RenderConfig::default());
}
