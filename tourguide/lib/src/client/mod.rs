//! HTTP client module.
//!
//! [`ApiClient::perform`] is the one request primitive. The project and
//! location operations are thin specializations of it:
//!
//! | Operation | Method | Endpoint |
//! |---|---|---|
//! | create | POST | `/project`, `/location` |
//! | list all | GET | `/project`, `/location` |
//! | get by id | GET | `/{collection}?id=eq.{id}` |
//! | update by id | PATCH | `/{collection}?id=eq.{id}` |
//! | delete by id | DELETE | `/{collection}?id=eq.{id}` |
//!
//! Reads and writes return a `Vec` of records. A lookup or update that
//! matches nothing returns an empty `Vec`, not an error.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use tourguide_lib::{ApiClient, ClientConfig, ProjectPatch};
//!
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//!
//! let patch = ProjectPatch { title: Some("New".into()), ..Default::default() };
//! let updated = client.update_project(7, &patch).await?;
//! ```

mod executor;
mod locations;
mod projects;

pub use executor::{ApiClient, ApiClientBuilder};
