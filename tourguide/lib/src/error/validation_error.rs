//! Caller-side field validation errors.

use thiserror::Error;

/// A record failed a field-level check before submission.
///
/// The client itself never raises these during a request; they come from
/// [`Position`](crate::Position) parsing and
/// [`ensure_project_exists`](crate::ensure_project_exists).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The position text is not in `(lat,long)` form.
    #[error("The location format must be (lat,long), for example (37.7749,-122.4194); got {input:?}")]
    InvalidPosition {
        /// The rejected input.
        input: String,
    },

    /// The referenced project is not among the known projects.
    #[error("Invalid project ID: {project_id}. The project does not exist")]
    UnknownProject {
        /// The project id that was referenced.
        project_id: i64,
    },
}
