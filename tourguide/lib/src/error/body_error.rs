//! Errors preparing an outgoing request body.

use thiserror::Error;

/// A request body could not be turned into a JSON object.
///
/// Raised before any request is sent, so the backend never sees it.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body serialized to something other than a JSON object.
    #[error("Request body must be a JSON object, got {kind}")]
    NotAnObject {
        /// The JSON kind the body serialized to.
        kind: &'static str,
    },

    /// Serialization itself failed.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}
