use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vca_core::error::CoreError;
use vca_jobs::JobError;
use vca_render::RendererError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain taxonomies ([`CoreError`], [`JobError`]) and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent `{ "error", "code" }` JSON bodies — no failure crosses the
/// service boundary unhandled.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A portal domain error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure in the submit/poll protocol.
    #[error(transparent)]
    Job(#[from] JobError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure talking to the PDF renderer.
    #[error("Renderer error: {0}")]
    Renderer(#[from] RendererError),

    /// A proxied upstream could not be reached.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- JobError variants ---
            AppError::Job(job) => match job {
                JobError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                JobError::Infrastructure(msg) => {
                    tracing::error!(error = %msg, "Job infrastructure error");
                    (
                        StatusCode::BAD_GATEWAY,
                        "INFRASTRUCTURE_ERROR",
                        "A backing service is unreachable".to_string(),
                    )
                }
                JobError::CorruptResult { job_id, reason } => {
                    tracing::error!(job_id = %job_id, reason = %reason, "Corrupt result record");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CORRUPT_RESULT",
                        "Stored job result could not be read".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Renderer errors ---
            AppError::Renderer(err) => {
                tracing::error!(error = %err, "Renderer error");
                (
                    StatusCode::BAD_GATEWAY,
                    "RENDERER_ERROR",
                    "PDF renderer is unavailable".to_string(),
                )
            }

            // --- Proxied upstream errors ---
            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream error");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Upstream service is unavailable".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// `RowNotFound` maps to 404, unique violations to 409, everything else to
/// a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
