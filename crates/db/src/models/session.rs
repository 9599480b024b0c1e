//! Session entity models for cookie authentication.

use sqlx::FromRow;
use vca_core::types::{DbId, Timestamp};

/// An unexpired session joined with the owning user's role.
///
/// Sessions are created by the identity collaborator, never by this
/// application — we only look them up.
#[derive(Debug, Clone, FromRow)]
pub struct SessionUser {
    pub user_id: DbId,
    pub role: String,
    pub expires_at: Timestamp,
}
