//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validation::{reject_null, validate_project_name};
use taskboard_db::models::project::{CreateProject, Project, UpdateProject};
use taskboard_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::guard::resolve;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_create_input(input: &CreateProject) -> AppResult<()> {
    validate_project_name(&input.project_name)?;
    Ok(())
}

fn validate_update_input(input: &UpdateProject) -> AppResult<()> {
    reject_null("project_name", &input.project_name)?;
    if let Some(name) = input.project_name.value() {
        validate_project_name(name)?;
    }
    Ok(())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_create_input(&input)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = resolve::<Project>(&state.pool, id).await?;
    Ok(Json(project))
}

/// PATCH /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = resolve::<Project>(&state.pool, id).await?;
    validate_update_input(&input)?;

    let project = ProjectRepo::update(&state.pool, project.id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = project.id, noop = input.is_empty(), "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Removes the project's tasks in the same transaction.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let project = resolve::<Project>(&state.pool, id).await?;
    let tasks_removed = ProjectRepo::delete(&state.pool, project.id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = project.id, tasks_removed, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
