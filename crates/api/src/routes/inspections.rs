//! Inspection scheduling passthrough.
//!
//! Same shape as the financing proxy, but the upstream authenticates with
//! HTTP basic credentials.
//!
//! ```text
//! GET|POST|PATCH|DELETE /{*path}
//! ```

use axum::extract::{Path, RawQuery, State};
use axum::http::Method;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use vca_core::roles;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

async fn forward(
    auth: AuthUser,
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    body: Option<Json<serde_json::Value>>,
) -> AppResult<impl IntoResponse> {
    auth.require(roles::PERM_INSPECTIONS_SCHEDULE)?;

    let body = body.map(|Json(value)| value);
    let (status, answer) = state
        .inspections
        .forward(method, &path, query.as_deref(), body.as_ref())
        .await?;

    Ok((status, Json(answer)))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{*path}",
        get(forward).post(forward).patch(forward).delete(forward),
    )
}
