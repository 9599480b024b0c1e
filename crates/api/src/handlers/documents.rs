//! Handlers for document generation and duplicate checking.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;
use vca_core::documents;
use vca_core::error::CoreError;
use vca_core::roles;
use vca_db::models::document::{GeneratedDocument, NewDocument};
use vca_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Request body for `POST /api/v1/documents`.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateDocumentRequest {
    #[validate(length(min = 1, message = "contract_number must not be empty"))]
    pub contract_number: String,
    pub document_type: String,
    #[validate(length(min = 1, message = "html must not be empty"))]
    pub html: String,
}

/// Request body for `POST /api/v1/documents/duplicate-check`.
#[derive(Debug, Deserialize, Validate)]
pub struct DuplicateCheckRequest {
    #[validate(length(min = 1, message = "contract_number must not be empty"))]
    pub contract_number: String,
    pub document_type: String,
}

/// Response body for the bare duplicate check.
#[derive(Debug, Serialize)]
pub struct DuplicateCheckResponse {
    pub duplicate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<GeneratedDocument>,
}

/// Query parameters for `GET /api/v1/documents`.
#[derive(Debug, Deserialize)]
pub struct ListDocumentsQuery {
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The duplicate lookup: same contract number and type, generated within
/// the configured window.
async fn find_duplicate(
    state: &AppState,
    contract_number: &str,
    document_type: &str,
) -> AppResult<Option<GeneratedDocument>> {
    let cutoff = documents::duplicate_cutoff(Utc::now(), state.config.duplicate_window_hours);
    Ok(DocumentRepo::find_recent(&state.pool, contract_number, document_type, cutoff).await?)
}

// ---------------------------------------------------------------------------
// Duplicate check
// ---------------------------------------------------------------------------

/// POST /api/v1/documents/duplicate-check
///
/// The bare lookup, without rendering anything.
pub async fn duplicate_check(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<DuplicateCheckRequest>,
) -> AppResult<impl IntoResponse> {
    auth.require(roles::PERM_DOCUMENTS_READ)?;
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    documents::validate_document_type(&input.document_type)?;

    let document = find_duplicate(&state, &input.contract_number, &input.document_type).await?;

    Ok(Json(DataResponse {
        data: DuplicateCheckResponse {
            duplicate: document.is_some(),
            document,
        },
    }))
}

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

/// POST /api/v1/documents
///
/// Duplicate-gate, render via the external headless browser, record the
/// result, and return the PDF bytes.
pub async fn generate_document(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<GenerateDocumentRequest>,
) -> AppResult<impl IntoResponse> {
    auth.require(roles::PERM_DOCUMENTS_GENERATE)?;
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    documents::validate_document_type(&input.document_type)?;

    if let Some(existing) =
        find_duplicate(&state, &input.contract_number, &input.document_type).await?
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Document '{}' for contract {} was already generated at {}",
            input.document_type, input.contract_number, existing.created_at
        ))));
    }

    let pdf = state.renderer.render_pdf(&input.html).await?;

    let record = DocumentRepo::create(
        &state.pool,
        &NewDocument {
            contract_number: input.contract_number,
            document_type: input.document_type,
            generated_by: auth.user_id,
            byte_size: pdf.len() as i64,
        },
    )
    .await?;

    tracing::info!(
        document_id = record.id,
        contract_number = %record.contract_number,
        document_type = %record.document_type,
        user_id = auth.user_id,
        "Document generated",
    );

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/pdf")],
        pdf,
    ))
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /api/v1/documents
///
/// Recent generated-document records, newest first.
pub async fn list_documents(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListDocumentsQuery>,
) -> AppResult<impl IntoResponse> {
    auth.require(roles::PERM_DOCUMENTS_READ)?;

    let records = DocumentRepo::list_recent(&state.pool, params.limit).await?;

    Ok(Json(DataResponse { data: records }))
}
