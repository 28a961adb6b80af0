use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the store is reachable and its tables exist, else `degraded`.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database answers queries.
    pub db_healthy: bool,
    /// Whether the `projects` and `tasks` tables are present.
    pub schema_ready: bool,
}

/// GET /health -- reports store reachability and schema presence.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = taskboard_db::health_check(&state.pool).await.is_ok();
    let schema_ready = db_healthy
        && taskboard_db::schema_ready(&state.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Schema check failed");
                false
            });

    let status = if schema_ready { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_ready,
    })
}

/// Mount health check routes at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
