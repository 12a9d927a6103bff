//! Project (tour) records.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::null_as_default;

/// What participants see on the tour's home screen.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum HomescreenDisplay {
    /// Show the initial clue text.
    #[default]
    #[serde(rename = "Display Initial Clue")]
    #[strum(serialize = "Display Initial Clue")]
    InitialClue,
    /// Show the first location.
    #[serde(rename = "Display Initial Location")]
    #[strum(serialize = "Display Initial Location")]
    InitialLocation,
}

/// How participants are scored.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ParticipantScoring {
    #[default]
    #[serde(rename = "Not Scored")]
    #[strum(serialize = "Not Scored")]
    NotScored,
    #[serde(rename = "Time Based")]
    #[strum(serialize = "Time Based")]
    TimeBased,
    #[serde(rename = "Points Based")]
    #[strum(serialize = "Points Based")]
    PointsBased,
}

/// A project as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
    #[serde(default)]
    pub initial_clue: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homescreen_display: HomescreenDisplay,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_published: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participant_scoring: ParticipantScoring,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Project {
    /// Copies the editable fields into a draft, dropping the id.
    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            instructions: self.instructions.clone(),
            initial_clue: self.initial_clue.clone(),
            homescreen_display: self.homescreen_display,
            is_published: self.is_published,
            participant_scoring: self.participant_scoring,
            username: self.username.clone(),
        }
    }
}

/// A full project body for create, without the backend-assigned id.
///
/// `username` may be set but is always replaced by the client's configured
/// identity before the request is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_clue: Option<String>,
    pub homescreen_display: HomescreenDisplay,
    pub is_published: bool,
    pub participant_scoring: ParticipantScoring,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl ProjectDraft {
    /// Creates an unpublished, unscored draft with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A partial project body for update. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_clue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homescreen_display: Option<HomescreenDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_scoring: Option<ParticipantScoring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl ProjectPatch {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<ProjectDraft> for ProjectPatch {
    fn from(draft: ProjectDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            instructions: Some(draft.instructions),
            initial_clue: draft.initial_clue,
            homescreen_display: Some(draft.homescreen_display),
            is_published: Some(draft.is_published),
            participant_scoring: Some(draft.participant_scoring),
            username: draft.username,
        }
    }
}
