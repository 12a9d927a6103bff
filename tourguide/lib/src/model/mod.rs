//! Typed records exchanged with the backend.
//!
//! Each collection has a record (as returned), a draft (full body for create)
//! and a patch (partial body for update).

mod location;
mod position;
mod project;

pub use location::{Location, LocationDraft, LocationPatch, LocationTrigger};
pub use position::Position;
pub use project::{HomescreenDisplay, ParticipantScoring, Project, ProjectDraft, ProjectPatch};

use serde::{Deserialize, Deserializer};

/// Reads `null` as the type's default. Rows created by other tools leave
/// text and number columns null.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
