//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::patch::Patch;
use taskboard_core::types::DbId;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub project_name: String,
    pub project_description: Option<String>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub project_name: String,
    pub project_description: Option<String>,
}

/// DTO for partially updating a project.
///
/// Missing keys leave the column as is. `project_description: null` clears
/// the description; `project_name: null` is rejected by the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    #[serde(default)]
    pub project_name: Patch<String>,
    #[serde(default)]
    pub project_description: Patch<String>,
}

impl UpdateProject {
    /// `true` when the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        !self.project_name.is_present() && !self.project_description.is_present()
    }
}
