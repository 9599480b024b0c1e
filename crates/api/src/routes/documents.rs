//! Route definitions for document generation.
//!
//! ```text
//! /                  generate + record (POST), list (GET)
//! /duplicate-check   bare duplicate lookup (POST)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Document routes, nested at `/documents`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(documents::generate_document).get(documents::list_documents),
        )
        .route("/duplicate-check", post(documents::duplicate_check))
}
