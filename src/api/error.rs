//! Error types for the API client.

use thiserror::Error;

/// Message used when an error response carries no usable detail.
pub const FALLBACK_ERROR_MESSAGE: &str = "An API error occurred.";

/// Errors that can occur while talking to the proxy backend.
///
/// Every variant displays as its bare message so callers can add their own
/// context prefix.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("{0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("{0}")]
    MalformedBody(String),
}

impl ApiError {
    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
