//! Layered error types for the tour API client.
//!
//! - [`ApiError`] - Top-level error returned by every client operation
//! - [`HttpError`] - Non-success HTTP responses (status + raw message)
//! - [`BodyError`] - Outgoing request bodies that cannot be sent
//! - [`ConfigError`] - Client configuration errors
//! - [`ValidationError`] - Caller-side field checks run before submitting

mod api_error;
mod body_error;
mod config_error;
mod http_error;
mod validation_error;

pub use api_error::ApiError;
pub use body_error::BodyError;
pub use config_error::ConfigError;
pub use http_error::{HttpError, UNKNOWN_ERROR_MESSAGE};
pub use validation_error::ValidationError;
