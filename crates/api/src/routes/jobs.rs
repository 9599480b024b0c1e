//! Route definitions for the job submission/polling contract.
//!
//! Mounted at the root, not under `/api/v1`: these paths are the wire
//! contract shared with the external simulation worker's clients.
//!
//! ```text
//! POST  /jobs            -> submit_job
//! GET   /jobs/{job_id}   -> poll_job
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs", post(jobs::submit_job))
        .route("/jobs/{job_id}", get(jobs::poll_job))
}
