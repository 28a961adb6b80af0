//! Repository for the `tasks` table.

use taskboard_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::DbPool;

const COLUMNS: &str = "id, project_id, description, due_to, is_complete";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// `project_id` is not checked here; the foreign key rejects unknown
    /// projects.
    pub async fn create(pool: &DbPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, description, due_to, is_complete)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.description)
            .bind(input.due_to)
            .bind(input.is_complete)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Update a task. Only fields present in `input` are written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project_id  = CASE WHEN ?2 THEN ?3 ELSE project_id END,
                description = CASE WHEN ?4 THEN ?5 ELSE description END,
                due_to      = CASE WHEN ?6 THEN ?7 ELSE due_to END,
                is_complete = CASE WHEN ?8 THEN ?9 ELSE is_complete END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.project_id.is_present())
            .bind(input.project_id.value().copied())
            .bind(input.description.is_present())
            .bind(input.description.value().map(String::as_str))
            .bind(input.due_to.is_present())
            .bind(input.due_to.value().copied())
            .bind(input.is_complete.is_present())
            .bind(input.is_complete.value().copied())
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
