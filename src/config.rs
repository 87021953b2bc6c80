//! Render configuration passed from JavaScript.
//!
//! Every field is optional on the JS side. Defaults reproduce the fixed
//! setup: canvas `canvas42` mounted into `#app`, sized from `#body`, grey
//! clear color, blue triangle, depth test on, WebGL2 backend.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{RenderError, RenderResult};

/// GPU backend requested for the canvas surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// WebGPU when the browser exposes it, else WebGL2.
    Auto,
    /// WebGPU only.
    WebGpu,
    /// WebGL2 through wgpu's GL backend.
    WebGl,
}

impl BackendPreference {
    /// Backend to open the canvas with. A canvas holds a single context
    /// type, so `Auto` decides up front instead of retrying.
    pub fn resolve(self, webgpu_available: bool) -> wgpu::Backends {
        match self {
            BackendPreference::Auto if webgpu_available => wgpu::Backends::BROWSER_WEBGPU,
            BackendPreference::Auto => wgpu::Backends::GL,
            BackendPreference::WebGpu => wgpu::Backends::BROWSER_WEBGPU,
            BackendPreference::WebGl => wgpu::Backends::GL,
        }
    }
}

/// Console log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration for one renderer instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Element the canvas is appended to.
    pub mount_id: String,
    /// Element whose client size determines the canvas size.
    pub size_source_id: String,
    /// Id assigned to the created canvas.
    pub canvas_id: String,
    /// RGBA clear color.
    pub clear_color: [f32; 4],
    /// RGBA flat fill color of the triangle.
    pub fill_color: [f32; 4],
    pub depth_test: bool,
    pub backend: BackendPreference,
    pub log_level: LogLevel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            size_source_id: "body".to_string(),
            canvas_id: "canvas42".to_string(),
            clear_color: [0.5, 0.5, 0.5, 0.9],
            fill_color: [0.0, 0.0, 1.0, 1.0],
            depth_test: true,
            backend: BackendPreference::WebGl,
            log_level: LogLevel::Info,
        }
    }
}

impl RenderConfig {
    /// Decode a config from JS. `undefined` and `null` yield the defaults.
    pub fn from_js(value: JsValue) -> RenderResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: RenderConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| RenderError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check ids are non-empty and color channels lie in `[0, 1]`.
    pub fn validate(&self) -> RenderResult<()> {
        for (name, id) in [
            ("mountId", &self.mount_id),
            ("sizeSourceId", &self.size_source_id),
            ("canvasId", &self.canvas_id),
        ] {
            if id.trim().is_empty() {
                return Err(RenderError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }
        validate_color("clearColor", &self.clear_color)?;
        validate_color("fillColor", &self.fill_color)?;
        Ok(())
    }

    /// Clear color as a wgpu color.
    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

fn validate_color(name: &str, color: &[f32; 4]) -> RenderResult<()> {
    match color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
        Some(c) => Err(RenderError::InvalidConfig(format!(
            "{} component {} is outside [0, 1]",
            name, c
        ))),
        None => Ok(()),
    }
}
