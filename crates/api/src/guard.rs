//! Existence guard for id-addressed operations.

use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_db::resource::Resource;
use taskboard_db::DbPool;

use crate::error::{AppError, AppResult};

/// Resolve `id` to the persisted entity of kind `R`.
///
/// Every get, update and delete handler calls this first. A missing row
/// short-circuits with `CoreError::NotFound` before any write is attempted;
/// otherwise the fetched entity is handed back for the operation to use.
pub async fn resolve<R: Resource>(pool: &DbPool, id: DbId) -> AppResult<R> {
    R::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: R::KIND,
            id,
        })
    })
}
