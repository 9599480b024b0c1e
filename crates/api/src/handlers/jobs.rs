//! Handlers for job submission and result polling.
//!
//! These bodies are the wire contract shared with the external simulation
//! worker and its clients — no `{ "data": ... }` envelope, no extra
//! fields. The endpoints are stateless: each call targets one key or
//! appends to a tail, so unbounded concurrent invocation is safe.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use vca_jobs::JobId;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /jobs`.
#[derive(Debug, Deserialize)]
pub struct SubmitJobRequest {
    /// Domain payload handed verbatim to the worker. Must be a non-empty
    /// JSON object; a missing field reads as `null` and fails validation.
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Response body for `POST /jobs`.
#[derive(Debug, Serialize)]
pub struct SubmitJobResponse {
    #[serde(rename = "jobId")]
    pub job_id: JobId,
}

/// POST /jobs
///
/// Accept a simulation request, append it to the worker channel, and
/// return the new job id immediately (fire-and-forget).
pub async fn submit_job(
    State(state): State<AppState>,
    Json(input): Json<SubmitJobRequest>,
) -> AppResult<impl IntoResponse> {
    let job_id = state.submitter.submit(input.payload).await?;

    tracing::info!(job_id = %job_id, "Job submitted");

    Ok((StatusCode::CREATED, Json(SubmitJobResponse { job_id })))
}

/// GET /jobs/{job_id}
///
/// Point lookup of the result record. Absence reads as `processing`;
/// unknown ids are indistinguishable from in-flight ones by design, so
/// this never 404s.
pub async fn poll_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.poller.poll(&JobId::from(job_id)).await?;
    Ok(Json(outcome))
}
