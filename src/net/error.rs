//! Errors produced by marketplace API calls.
//!
//! ERROR HANDLING
//! ==============
//! `Rejected` keeps the raw response body so callers can pull field-level
//! validation messages out of it. Everything else is a transport or decoding
//! failure that only ever surfaces as a generic message in the UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by [`crate::net::api::ApiClient`] operations.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, body: serde_json::Value },

    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),

    /// A success response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The session's role may not perform this action; nothing was sent.
    #[error("not permitted: {0}")]
    NotPermitted(&'static str),

    /// No HTTP transport exists in this build (non-browser target).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Response body of a rejected request, if the server answered at all.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
