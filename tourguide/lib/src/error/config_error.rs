//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while building a [`ClientConfig`](crate::ClientConfig) or an
/// [`ApiClient`](crate::ApiClient), never during a request.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL is not http or https.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The scheme that was given.
        scheme: String,
    },

    /// A required configuration field is empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is unset or blank.
    #[error("Missing environment variable: {var}")]
    MissingEnv {
        /// The variable name.
        var: &'static str,
    },

    /// The bearer token cannot be carried in an HTTP header.
    #[error("Invalid bearer token: contains characters not allowed in a header")]
    InvalidToken,

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
