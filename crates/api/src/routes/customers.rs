//! Customer/contract lookup passthrough.
//!
//! Read-only: only GET is forwarded, with the bearer token injected
//! server-side.
//!
//! ```text
//! GET /{*path}
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
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> AppResult<impl IntoResponse> {
    auth.require(roles::PERM_CUSTOMERS_READ)?;

    let (status, answer) = state
        .customers
        .forward(Method::GET, &path, query.as_deref(), None)
        .await?;

    Ok((status, Json(answer)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/{*path}", get(forward))
}
