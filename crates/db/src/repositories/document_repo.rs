//! Repository for the `generated_documents` table.
//!
//! The duplicate check is a parameterized equality lookup within a time
//! window — nothing fancier. What counts as "within the window" is decided
//! by `vca_core::documents`; this repo just runs the query it implies.

use sqlx::PgPool;
use vca_core::types::Timestamp;

use crate::models::document::{GeneratedDocument, NewDocument};

/// Column list shared across queries.
const COLUMNS: &str = "id, contract_number, document_type, generated_by, byte_size, created_at";

/// Maximum page size for document listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for document listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides access to generated-document records.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Record a freshly rendered document.
    pub async fn create(
        pool: &PgPool,
        doc: &NewDocument,
    ) -> Result<GeneratedDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO generated_documents \
                (contract_number, document_type, generated_by, byte_size) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GeneratedDocument>(&query)
            .bind(&doc.contract_number)
            .bind(&doc.document_type)
            .bind(doc.generated_by)
            .bind(doc.byte_size)
            .fetch_one(pool)
            .await
    }

    /// Find the most recent document with the same contract number and type
    /// generated at or after `cutoff` — the duplicate check.
    pub async fn find_recent(
        pool: &PgPool,
        contract_number: &str,
        document_type: &str,
        cutoff: Timestamp,
    ) -> Result<Option<GeneratedDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generated_documents \
             WHERE contract_number = $1 AND document_type = $2 AND created_at >= $3 \
             ORDER BY created_at DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, GeneratedDocument>(&query)
            .bind(contract_number)
            .bind(document_type)
            .bind(cutoff)
            .fetch_optional(pool)
            .await
    }

    /// List records, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<GeneratedDocument>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM generated_documents \
             ORDER BY created_at DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, GeneratedDocument>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
