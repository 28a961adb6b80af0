//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::patch::Patch;
use taskboard_core::types::{Date, DbId};

/// A task row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub due_to: Option<Date>,
    pub is_complete: bool,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_id: DbId,
    pub description: String,
    pub due_to: Option<Date>,
    /// Defaults to `false` if omitted.
    #[serde(default)]
    pub is_complete: bool,
}

/// DTO for partially updating a task.
///
/// An `id` key in the body is ignored; the path id decides which row changes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    #[serde(default)]
    pub project_id: Patch<DbId>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub due_to: Patch<Date>,
    #[serde(default)]
    pub is_complete: Patch<bool>,
}

impl UpdateTask {
    /// `true` when the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        !self.project_id.is_present()
            && !self.description.is_present()
            && !self.due_to.is_present()
            && !self.is_complete.is_present()
    }
}
