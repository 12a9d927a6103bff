//! Location (tour stop) records.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{Position, Project, null_as_default};
use crate::error::ValidationError;
use crate::validation::ensure_project_exists;

/// What unlocks a location for a participant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum LocationTrigger {
    /// Arriving at the coordinates.
    #[default]
    Location,
    /// Scanning the location's QR code.
    #[serde(rename = "QR Code")]
    #[strum(serialize = "QR Code")]
    QrCode,
    /// Either of the above.
    Both,
}

/// A location as stored by the backend.
///
/// `location_position` is kept as the stored text; rows written by other
/// tools may not be in strict `(lat,long)` form. Use [`Location::position`]
/// to validate it or [`Position::extract`] to read it leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub location_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_trigger: LocationTrigger,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score_points: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clue: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_content: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub project_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Location {
    /// Parses the stored position strictly.
    pub fn position(&self) -> Result<Position, ValidationError> {
        self.location_position.parse()
    }
}

/// A full location body for create, without the backend-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDraft {
    pub location_name: String,
    pub location_trigger: LocationTrigger,
    pub location_position: Position,
    pub score_points: i64,
    pub clue: String,
    pub location_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub project_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl LocationDraft {
    /// Creates a draft at the default position with no score, clue or content.
    pub fn new(location_name: impl Into<String>, project_id: i64) -> Self {
        Self {
            location_name: location_name.into(),
            location_trigger: LocationTrigger::default(),
            location_position: Position::default(),
            score_points: 0,
            clue: String::new(),
            location_content: String::new(),
            photo_url: None,
            project_id,
            username: None,
        }
    }

    /// Checks that the owning project is among `projects`.
    ///
    /// The position is already valid by construction. Callers must run this
    /// before creating the location; the client does not check references.
    pub fn validate(&self, projects: &[Project]) -> Result<(), ValidationError> {
        ensure_project_exists(self.project_id, projects)
    }
}

/// A partial location body for update. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_trigger: Option<LocationTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl LocationPatch {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks a changed `project_id`, if any, against `projects`.
    pub fn validate(&self, projects: &[Project]) -> Result<(), ValidationError> {
        match self.project_id {
            Some(project_id) => ensure_project_exists(project_id, projects),
            None => Ok(()),
        }
    }
}
