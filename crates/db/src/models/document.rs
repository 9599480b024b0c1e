//! Generated-document entity models.

use serde::Serialize;
use sqlx::FromRow;
use vca_core::types::{DbId, Timestamp};

/// A row from the `generated_documents` table.
///
/// One row per successfully rendered PDF; the bytes themselves are handed
/// to the caller and never stored here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GeneratedDocument {
    pub id: DbId,
    pub contract_number: String,
    pub document_type: String,
    pub generated_by: DbId,
    pub byte_size: i64,
    pub created_at: Timestamp,
}

/// Insert data for a freshly rendered document.
#[derive(Debug)]
pub struct NewDocument {
    pub contract_number: String,
    pub document_type: String,
    pub generated_by: DbId,
    pub byte_size: i64,
}
