//! HTTP methods spoken to the tour backend.

use strum::{Display, EnumString};

/// HTTP methods used against the resource collections.
///
/// ## Examples
///
/// ```rust
/// use tourguide_lib::RestMethod;
///
/// let method: RestMethod = "PATCH".parse().unwrap();
/// assert!(method.has_body());
/// assert!(method.requests_representation());
/// assert!(!RestMethod::Delete.requests_representation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// List or look up records.
    Get,
    /// Create a record.
    Post,
    /// Replace fields on matching records.
    Patch,
    /// Remove matching records.
    Delete,
}

impl RestMethod {
    /// Returns `true` if this method carries a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }

    /// Returns `true` if the backend should echo the affected records.
    ///
    /// Writes send `Prefer: return=representation`; without it the backend
    /// answers creates and updates with no body.
    pub fn requests_representation(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
