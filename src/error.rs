//! Structured error types for sheetmap.
//!
//! Lookups on a loaded document never fail (they return `None` or an empty
//! value). Errors only come from the outer surfaces: JSON parsing, file I/O
//! and DOM construction.

/// All errors that can occur while loading, writing or rendering documents.
#[derive(Debug, thiserror::Error)]
pub enum SheetmapError {
    /// JSON parse or serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// DOM construction failed (wasm32 only).
    #[error("DOM error: {0}")]
    Dom(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetmapError>;

impl From<String> for SheetmapError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for SheetmapError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SheetmapError> for wasm_bindgen::JsValue {
    fn from(e: SheetmapError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SheetmapError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        Self::Dom(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
