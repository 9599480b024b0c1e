use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `ok` only if every collaborator answers.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Whether the result store is reachable.
    pub queue_healthy: bool,
}

/// GET /health -- service, database, and result-store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = vca_db::health_check(&state.pool).await.is_ok();

    // Any point lookup doubles as a liveness probe for the result store.
    let queue_healthy = state.result_store.fetch("result:healthcheck").await.is_ok();

    let status = if db_healthy && queue_healthy {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        queue_healthy,
    })
}

/// Mount health check routes (root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
