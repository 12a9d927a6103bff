//! Project collection operations.

use tracing::instrument;

use super::ApiClient;
use crate::error::ApiError;
use crate::filter::Resource;
use crate::method::RestMethod;
use crate::model::{Project, ProjectDraft, ProjectPatch};

impl ApiClient {
    /// Creates a project and returns the backend's echo of it.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Vec<Project>, ApiError> {
        self.write_records(&Resource::Project.path(), RestMethod::Post, draft)
            .await
    }

    /// Lists every project.
    pub async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.fetch_records(&Resource::Project.path()).await
    }

    /// Looks up one project. An empty result means it does not exist.
    pub async fn get_project(&self, id: i64) -> Result<Vec<Project>, ApiError> {
        self.fetch_records(&Resource::Project.by_id(id)).await
    }

    /// Applies `patch` to the project and returns the updated record.
    ///
    /// An empty result means no project has this id.
    #[instrument(skip(self, patch))]
    pub async fn update_project(
        &self,
        id: i64,
        patch: &ProjectPatch,
    ) -> Result<Vec<Project>, ApiError> {
        self.write_records(&Resource::Project.by_id(id), RestMethod::Patch, patch)
            .await
    }

    /// Deletes the project.
    #[instrument(skip(self))]
    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        self.delete_records(&Resource::Project.by_id(id)).await
    }
}
