pub mod customers;
pub mod documents;
pub mod financing;
pub mod health;
pub mod inspections;
pub mod jobs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree (portal features).
///
/// The job endpoints are NOT here — they are mounted at the root, see
/// [`jobs::router`].
///
/// ```text
/// /documents                    render + record (POST), list (GET)
/// /documents/duplicate-check    bare duplicate lookup (POST)
/// /financing/{*path}            financing system passthrough
/// /inspections/{*path}          inspection scheduling passthrough
/// /customers/{*path}            customer/contract lookups (GET only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/documents", documents::router())
        .nest("/financing", financing::router())
        .nest("/inspections", inspections::router())
        .nest("/customers", customers::router())
}
