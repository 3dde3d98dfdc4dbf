//! Shell error types
//!
//! Everything that can go wrong while loading fragments, reading the host
//! page configuration or touching browser storage.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised inside the dashboard shell
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Request for {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read as text
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// `localStorage` is missing or rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// The inline configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),
}

impl ShellError {
    /// True for failures that happened while fetching a fragment
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ShellError::Network(_) | ShellError::Status { .. } | ShellError::Body(_)
        )
    }
}

impl From<gloo_net::Error> for ShellError {
    fn from(err: gloo_net::Error) -> Self {
        ShellError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::Config(err.to_string())
    }
}

impl From<JsValue> for ShellError {
    fn from(value: JsValue) -> Self {
        ShellError::Dom(format!("{:?}", value))
    }
}

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
