//! Repository for the `projects` table.

use taskboard_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_name, project_description";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (project_name, project_description)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.project_name)
            .bind(&input.project_description)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only fields present in `input` are written; a present
    /// `null` is written as NULL.
    ///
    /// An empty patch still runs the statement and returns the row unchanged.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                project_name        = CASE WHEN ?2 THEN ?3 ELSE project_name END,
                project_description = CASE WHEN ?4 THEN ?5 ELSE project_description END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.project_name.is_present())
            .bind(input.project_name.value().map(String::as_str))
            .bind(input.project_description.is_present())
            .bind(input.project_description.value().map(String::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Delete a project together with all of its tasks.
    ///
    /// Both deletes run in one transaction. Returns the number of tasks removed,
    /// or `None` (with nothing removed) if the project does not exist.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let tasks_removed = sqlx::query("DELETE FROM tasks WHERE project_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(tasks_removed))
    }
}
