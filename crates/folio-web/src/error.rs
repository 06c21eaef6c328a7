//! Error types for the browser bindings

use folio_core::ConfigError;
use wasm_bindgen::JsValue;

/// Errors raised while binding page behavior to the DOM
#[derive(Debug, Clone, thiserror::Error)]
pub enum WebError {
    /// Not running in a browser window
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    #[error("document has no <head> element")]
    HeadNotAvailable,

    /// A required element is missing
    #[error("element #{0} not found")]
    ElementNotFound(String),

    /// Element exists but has the wrong type
    #[error("element #{id} is not a {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("failed to add {event} listener: {message}")]
    ListenerFailed { event: &'static str, message: String },

    #[error("failed to create intersection observer: {0}")]
    ObserverFailed(String),

    /// Any other rejected `web-sys` call
    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}

impl From<WebError> for JsValue {
    fn from(error: WebError) -> Self {
        Self::from_str(&error.to_string())
    }
}

/// Result type alias for browser binding operations
pub type Result<T> = std::result::Result<T, WebError>;
