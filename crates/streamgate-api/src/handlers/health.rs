//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Overall status: `ok` or `degraded`.
    pub status: String,
    /// Whether the database answered a ping.
    pub database: bool,
}

/// GET /api/health — liveness plus a database ping. No auth.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .is_ok();

    Json(HealthStatus {
        status: if database { "ok" } else { "degraded" }.to_string(),
        database,
    })
}
