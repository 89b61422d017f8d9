//! Errors that stop the controller from starting at all.
//!
//! Everything else on the page degrades per behavior: a missing element or a
//! failed clipboard write is logged and that one feature stays inert.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by controller setup and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The global `window` object is not available (not running in a browser).
    #[error("no global window")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<body>` element yet.
    #[error("document has no body")]
    NoBody,
    /// The embedded configuration block is not valid JSON for [`crate::config::PageConfig`].
    #[error("invalid page config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// The configuration parsed but holds a value the behaviors cannot use.
    #[error("invalid page config value `{field}`: {reason}")]
    ConfigValue { field: &'static str, reason: &'static str },
}

#[cfg(feature = "hydrate")]
impl From<PageError> for wasm_bindgen::JsValue {
    fn from(err: PageError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
