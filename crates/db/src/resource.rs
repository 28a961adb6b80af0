//! Lookup-by-id shared by every entity kind.
//!
//! The API layer's existence guard is generic over [`Resource`], so the
//! "missing id means 404" rule is written once for projects and tasks.

use async_trait::async_trait;
use taskboard_core::types::DbId;

use crate::models::project::Project;
use crate::models::task::Task;
use crate::repositories::{ProjectRepo, TaskRepo};
use crate::DbPool;

/// An entity kind that can be resolved from its primary key.
#[async_trait]
pub trait Resource: Sized + Send {
    /// Human-readable kind, used in not-found messages.
    const KIND: &'static str;

    async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Self>, sqlx::Error>;
}

#[async_trait]
impl Resource for Project {
    const KIND: &'static str = "Project";

    async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Self>, sqlx::Error> {
        ProjectRepo::find_by_id(pool, id).await
    }
}

#[async_trait]
impl Resource for Task {
    const KIND: &'static str = "Task";

    async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Self>, sqlx::Error> {
        TaskRepo::find_by_id(pool, id).await
    }
}
