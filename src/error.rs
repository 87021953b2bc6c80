//! Central error types for the triangle renderer.
//!
//! Every JS-facing export returns `Result<_, JsValue>`; `RenderError`
//! converts into a JS `Error` carrying its display message.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Main error type for renderer operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// `window` is not available (not running in a browser main thread)
    #[error("No window")]
    NoWindow,

    /// The window has no document
    #[error("No document")]
    NoDocument,

    /// DOM element not found by ID
    #[error("Element not found with ID {id:?}")]
    ElementNotFound { id: String },

    /// DOM manipulation failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration passed from JS is malformed or out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Vertex/index data violates an invariant
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Surface creation or configuration failed
    #[error("Surface error: {0}")]
    Surface(String),

    /// No GPU adapter matched the request
    #[error("No suitable GPU adapter found: {0}")]
    AdapterNotFound(String),

    /// Device/queue request failed
    #[error("Failed to get device: {0}")]
    Device(String),

    /// Acquiring or presenting a frame failed
    #[error("Frame error: {0}")]
    Frame(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error, converting it to `RenderError::Other`.
    fn context(self, msg: &str) -> RenderResult<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for Result<T, E> {
    fn context(self, msg: &str) -> RenderResult<T> {
        self.map_err(|e| RenderError::Other(format!("{}: {:?}", msg, e)))
    }
}

/// Type alias for Results using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;
