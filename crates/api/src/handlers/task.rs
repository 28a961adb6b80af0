//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validation::{reject_null, validate_task_description};
use taskboard_db::models::task::{CreateTask, Task, UpdateTask};
use taskboard_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::guard::resolve;
use crate::state::AppState;

fn validate_update_input(input: &UpdateTask) -> AppResult<()> {
    reject_null("project_id", &input.project_id)?;
    reject_null("description", &input.description)?;
    reject_null("is_complete", &input.is_complete)?;
    if let Some(description) = input.description.value() {
        validate_task_description(description)?;
    }
    Ok(())
}

/// POST /api/tasks
///
/// `project_id` is not looked up first; an unknown project is rejected by
/// the foreign key and reported as `INTEGRITY_ERROR`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate_task_description(&input.description)?;

    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Task>> {
    let task = resolve::<Task>(&state.pool, id).await?;
    Ok(Json(task))
}

/// PATCH /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = resolve::<Task>(&state.pool, id).await?;
    validate_update_input(&input)?;

    let task = TaskRepo::update(&state.pool, task.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    tracing::info!(task_id = task.id, noop = input.is_empty(), "Task updated");
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let task = resolve::<Task>(&state.pool, id).await?;
    let deleted = TaskRepo::delete(&state.pool, task.id).await?;
    if deleted {
        tracing::info!(task_id = task.id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}
