//! Table definitions, applied once at process start.

use crate::DbPool;

/// Tables the service cannot run without.
const TABLES: &[&str] = &["projects", "tasks"];

/// DDL statements in dependency order. Every statement is idempotent.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS projects (
        id                  INTEGER PRIMARY KEY AUTOINCREMENT,
        project_name        TEXT NOT NULL,
        project_description TEXT
    )",
    "CREATE TABLE IF NOT EXISTS tasks (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id  INTEGER NOT NULL REFERENCES projects (id) ON DELETE CASCADE,
        is_complete BOOLEAN NOT NULL DEFAULT 0,
        due_to      DATE,
        description TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_tasks_project_id ON tasks (project_id)",
];

/// Create the `projects` and `tasks` tables if they do not exist yet.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again.
pub async fn create_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::debug!(tables = TABLES.len(), "Schema ensured");
    Ok(())
}

/// Report whether every table in the schema exists.
pub async fn schema_ready(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let (present,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN (?1, ?2)",
    )
    .bind(TABLES[0])
    .bind(TABLES[1])
    .fetch_one(pool)
    .await?;
    Ok(present == TABLES.len() as i64)
}
