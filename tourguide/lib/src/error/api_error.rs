//! Top-level API error type.

use super::{BodyError, ConfigError, HttpError};
use thiserror::Error;

/// Error returned by every client operation.
///
/// Callers that only care whether a call succeeded can treat all variants
/// alike; the variants exist for the ones that want to branch.
///
/// ## Examples
///
/// ```rust,ignore
/// use tourguide_lib::ApiError;
///
/// match client.get_project(7).await {
///     Ok(found) if found.is_empty() => eprintln!("no such project"),
///     Ok(found) => println!("{}", found[0].title),
///     Err(ApiError::Http(e)) => eprintln!("backend rejected: {e}"),
///     Err(e) => eprintln!("request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Network or protocol failure, as raised by the transport.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response did not contain the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// The request body could not be prepared.
    #[error(transparent)]
    Body(#[from] BodyError),

    /// The endpoint is not a path on the configured backend.
    #[error("Invalid endpoint: {endpoint:?} (expected a path starting with '/')")]
    InvalidEndpoint {
        /// The endpoint that was given.
        endpoint: String,
    },

    /// The client is misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns the HTTP status code, if the failure carried one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => Some(e.status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_error() {
        let api_err: ApiError = HttpError::new(404, "not found").into();
        assert!(matches!(api_err, ApiError::Http(_)));
        assert_eq!(api_err.status_code(), Some(404));
        assert!(api_err.is_not_found());
    }

    #[test]
    fn test_http_display_is_transparent() {
        let api_err: ApiError = HttpError::new(409, "duplicate key").into();
        assert_eq!(
            api_err.to_string(),
            "HTTP error! status: 409, message: duplicate key"
        );
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let api_err = ApiError::Parse(json_err);
        assert_eq!(api_err.status_code(), None);
        assert!(api_err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_invalid_endpoint_display() {
        let api_err = ApiError::InvalidEndpoint {
            endpoint: "location".to_string(),
        };
        assert_eq!(
            api_err.to_string(),
            "Invalid endpoint: \"location\" (expected a path starting with '/')"
        );
        assert_eq!(api_err.status_code(), None);
    }

    #[test]
    fn test_from_config_error() {
        let api_err: ApiError = ConfigError::InvalidToken.into();
        assert!(matches!(api_err, ApiError::Config(ConfigError::InvalidToken)));
    }
}
