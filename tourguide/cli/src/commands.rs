//! Command handlers. Each one calls the API client and renders the result.

use thiserror::Error;
use tourguide_lib::{
    ApiClient, ApiError, ConfigError, LocationDraft, LocationPatch, ProjectDraft, ProjectPatch,
    ProjectReview, Resource, ValidationError,
};
use tracing::info;

use crate::render;
use crate::{LocationCommand, LocationFields, ProjectCommand, ProjectFields};

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: i64 },

    #[error("Nothing to update: pass at least one field")]
    EmptyUpdate,

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

pub async fn project(client: &ApiClient, command: ProjectCommand) -> Result<(), CliError> {
    match command {
        ProjectCommand::List => {
            let projects = client.get_projects().await?;
            render::records(&projects)
        }
        ProjectCommand::Show { id } => {
            let found = client.get_project(id).await?;
            let project = found.first().ok_or(CliError::NotFound {
                resource: Resource::Project,
                id,
            })?;
            render::record(project)
        }
        ProjectCommand::Create { title, fields } => {
            let draft = project_draft(title, fields);
            let created = client.create_project(&draft).await?;
            info!(count = created.len(), "project created");
            render::records(&created)
        }
        ProjectCommand::Update { id, title, fields } => {
            let patch = project_patch(title, fields);
            if patch.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            let updated = client.update_project(id, &patch).await?;
            if updated.is_empty() {
                return Err(CliError::NotFound {
                    resource: Resource::Project,
                    id,
                });
            }
            render::records(&updated)
        }
        ProjectCommand::Delete { id } => {
            client.delete_project(id).await?;
            render::deleted(Resource::Project, id);
            Ok(())
        }
    }
}

pub async fn location(client: &ApiClient, command: LocationCommand) -> Result<(), CliError> {
    match command {
        LocationCommand::List { project } => {
            let locations = match project {
                Some(project_id) => client.get_locations_for_project(project_id).await?,
                None => client.get_locations().await?,
            };
            render::records(&locations)
        }
        LocationCommand::Show { id } => {
            let found = client.get_location(id).await?;
            let location = found.first().ok_or(CliError::NotFound {
                resource: Resource::Location,
                id,
            })?;
            render::record(location)
        }
        LocationCommand::Create {
            name,
            project,
            fields,
        } => {
            let draft = location_draft(name, project, fields);
            // The project must exist before a location can point at it.
            let projects = client.get_projects().await?;
            draft.validate(&projects)?;

            let created = client.create_location(&draft).await?;
            info!(count = created.len(), "location created");
            render::records(&created)
        }
        LocationCommand::Update {
            id,
            name,
            project,
            fields,
        } => {
            let patch = location_patch(name, project, fields);
            if patch.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            if patch.project_id.is_some() {
                let projects = client.get_projects().await?;
                patch.validate(&projects)?;
            }

            let updated = client.update_location(id, &patch).await?;
            if updated.is_empty() {
                return Err(CliError::NotFound {
                    resource: Resource::Location,
                    id,
                });
            }
            render::records(&updated)
        }
        LocationCommand::Delete { id } => {
            client.delete_location(id).await?;
            render::deleted(Resource::Location, id);
            Ok(())
        }
    }
}

pub async fn review(client: &ApiClient, project_id: i64) -> Result<(), CliError> {
    let (projects, locations) = tokio::join!(client.get_projects(), client.get_locations());
    let projects = projects?;
    let locations = locations?;

    let project = projects
        .iter()
        .find(|p| p.id == project_id)
        .ok_or(CliError::NotFound {
            resource: Resource::Project,
            id: project_id,
        })?;

    let review = ProjectReview::build(project_id, &locations);
    render::review(project, &review);
    Ok(())
}

fn project_draft(title: String, fields: ProjectFields) -> ProjectDraft {
    let mut draft = ProjectDraft::new(title);
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if let Some(instructions) = fields.instructions {
        draft.instructions = instructions;
    }
    draft.initial_clue = fields.initial_clue;
    if let Some(mode) = fields.homescreen_display {
        draft.homescreen_display = mode;
    }
    if let Some(published) = fields.published {
        draft.is_published = published;
    }
    if let Some(scoring) = fields.scoring {
        draft.participant_scoring = scoring;
    }
    draft
}

fn project_patch(title: Option<String>, fields: ProjectFields) -> ProjectPatch {
    ProjectPatch {
        title,
        description: fields.description,
        instructions: fields.instructions,
        initial_clue: fields.initial_clue,
        homescreen_display: fields.homescreen_display,
        is_published: fields.published,
        participant_scoring: fields.scoring,
        username: None,
    }
}

fn location_draft(name: String, project_id: i64, fields: LocationFields) -> LocationDraft {
    let mut draft = LocationDraft::new(name, project_id);
    if let Some(trigger) = fields.trigger {
        draft.location_trigger = trigger;
    }
    if let Some(position) = fields.position {
        draft.location_position = position;
    }
    if let Some(score) = fields.score {
        draft.score_points = score;
    }
    if let Some(clue) = fields.clue {
        draft.clue = clue;
    }
    if let Some(content) = fields.content {
        draft.location_content = content;
    }
    draft.photo_url = fields.photo_url;
    draft
}

fn location_patch(name: Option<String>, project: Option<i64>, fields: LocationFields) -> LocationPatch {
    LocationPatch {
        location_name: name,
        location_trigger: fields.trigger,
        location_position: fields.position,
        score_points: fields.score,
        clue: fields.clue,
        location_content: fields.content,
        photo_url: fields.photo_url,
        project_id: project,
        username: None,
    }
}
