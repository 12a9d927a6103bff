//! Non-success HTTP responses.

use thiserror::Error;

/// Message used when an error response carries no readable body.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

/// The backend answered with a non-2xx status.
///
/// The message is the raw response text. Error bodies are never parsed as
/// JSON since the backend does not guarantee they are JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP error! status: {status}, message: {message}")]
pub struct HttpError {
    /// The HTTP status code returned.
    pub status: u16,
    /// Raw response text, or [`UNKNOWN_ERROR_MESSAGE`].
    pub message: String,
}

impl HttpError {
    /// Creates an error with an explicit message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates an error from a response body that may be missing or empty.
    pub fn from_body(status: u16, body: Option<String>) -> Self {
        let message = body
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        Self { status, message }
    }
}
