//! Checks a caller runs before submitting a record.
//!
//! None of these are enforced by the client. Creating a location that points
//! at a project must be preceded by a successful project lookup; the client
//! sends whatever it is given.

use crate::error::ValidationError;
use crate::model::Project;

/// Fails unless `project_id` is the id of one of `projects`.
pub fn ensure_project_exists(project_id: i64, projects: &[Project]) -> Result<(), ValidationError> {
    if projects.iter().any(|p| p.id == project_id) {
        Ok(())
    } else {
        Err(ValidationError::UnknownProject { project_id })
    }
}
