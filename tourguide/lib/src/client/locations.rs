//! Location collection operations.

use tracing::instrument;

use super::ApiClient;
use crate::error::ApiError;
use crate::filter::{EqFilter, Resource};
use crate::method::RestMethod;
use crate::model::{Location, LocationDraft, LocationPatch};

impl ApiClient {
    /// Creates a location and returns the backend's echo of it.
    ///
    /// The owning project is not checked here; run
    /// [`LocationDraft::validate`] against a fresh project list first.
    #[instrument(skip(self, draft), fields(project_id = draft.project_id))]
    pub async fn create_location(&self, draft: &LocationDraft) -> Result<Vec<Location>, ApiError> {
        self.write_records(&Resource::Location.path(), RestMethod::Post, draft)
            .await
    }

    /// Lists every location across all projects.
    pub async fn get_locations(&self) -> Result<Vec<Location>, ApiError> {
        self.fetch_records(&Resource::Location.path()).await
    }

    /// Lists the locations of one project, filtered by the backend.
    pub async fn get_locations_for_project(
        &self,
        project_id: i64,
    ) -> Result<Vec<Location>, ApiError> {
        let filter = EqFilter::new("project_id", project_id);
        self.fetch_records(&Resource::Location.filtered(&filter))
            .await
    }

    /// Looks up one location. An empty result means it does not exist.
    pub async fn get_location(&self, id: i64) -> Result<Vec<Location>, ApiError> {
        self.fetch_records(&Resource::Location.by_id(id)).await
    }

    /// Applies `patch` to the location and returns the updated record.
    #[instrument(skip(self, patch))]
    pub async fn update_location(
        &self,
        id: i64,
        patch: &LocationPatch,
    ) -> Result<Vec<Location>, ApiError> {
        self.write_records(&Resource::Location.by_id(id), RestMethod::Patch, patch)
            .await
    }

    /// Deletes the location.
    #[instrument(skip(self))]
    pub async fn delete_location(&self, id: i64) -> Result<(), ApiError> {
        self.delete_records(&Resource::Location.by_id(id)).await
    }
}
