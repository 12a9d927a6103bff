//! Resource collections and equality filters.
//!
//! The backend selects records with `field=eq.value` query parameters. Every
//! lookup, update and delete by id goes through [`Resource::by_id`], so the
//! filter syntax is produced in exactly one place.

use std::fmt;

use strum::{AsRefStr, Display, EnumString};

/// A record collection exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    /// Tours.
    Project,
    /// Stops within a tour.
    Location,
}

impl Resource {
    /// The collection path, e.g. `/project`.
    pub fn path(self) -> String {
        format!("/{self}")
    }

    /// The collection path narrowed by a filter, e.g. `/location?project_id=eq.7`.
    pub fn filtered(self, filter: &EqFilter) -> String {
        format!("/{self}?{filter}")
    }

    /// The collection path narrowed to one id, e.g. `/project?id=eq.7`.
    pub fn by_id(self, id: i64) -> String {
        self.filtered(&EqFilter::id(id))
    }
}

/// An equality filter rendered as `field=eq.value`.
///
/// The value is form-encoded; the field name is used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqFilter {
    field: String,
    value: String,
}

impl EqFilter {
    /// Creates a filter on an arbitrary column.
    pub fn new(field: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Creates a filter on the `id` column.
    pub fn id(id: i64) -> Self {
        Self::new("id", id)
    }

    /// The filtered column.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The unencoded value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EqFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded: String = url::form_urlencoded::byte_serialize(self.value.as_bytes()).collect();
        write!(f, "{}=eq.{}", self.field, encoded)
    }
}
