//! Typed client for the location-based tour authoring API.
//!
//! The backend stores two collections, projects (tours) and locations
//! (stops), behind a REST interface that filters with `field=eq.value`
//! query parameters. This crate wraps it with:
//!
//! - **One request primitive**: [`ApiClient::perform`] attaches bearer auth,
//!   JSON content type and, on writes, `Prefer: return=representation`
//! - **Identity injection**: every write body gets the configured `username`
//! - **Typed records**: [`Project`] and [`Location`] with draft and patch shapes
//! - **Normalized errors**: every call returns `Result<_, ApiError>`
//! - **Caller-side checks**: [`Position`] format and [`ensure_project_exists`]
//! - **Review totals**: [`ProjectReview`] sums a project's location scores
//!
//! ## Example
//!
//! ```rust,ignore
//! use tourguide_lib::{ApiClient, ClientConfig, LocationDraft};
//!
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//!
//! let projects = client.get_projects().await?;
//! let draft = LocationDraft::new("Great Court", 7);
//! draft.validate(&projects)?;
//! let created = client.create_location(&draft).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod method;
pub mod model;
pub mod review;
pub mod validation;

// Re-exports for convenience
pub use client::{ApiClient, ApiClientBuilder};
pub use config::ClientConfig;
pub use error::{ApiError, BodyError, ConfigError, HttpError, ValidationError};
pub use filter::{EqFilter, Resource};
pub use method::RestMethod;
pub use model::{
    HomescreenDisplay, Location, LocationDraft, LocationPatch, LocationTrigger,
    ParticipantScoring, Position, Project, ProjectDraft, ProjectPatch,
};
pub use review::ProjectReview;
pub use validation::ensure_project_exists;
