//! Repository for session-cookie lookups.

use sqlx::PgPool;

use crate::models::session::SessionUser;

/// Read-only access to the `sessions` table.
pub struct SessionRepo;

impl SessionRepo {
    /// Look up an unexpired session token, returning the owning user and
    /// role. `None` covers both unknown and expired tokens — callers treat
    /// them identically.
    pub async fn find_valid(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<SessionUser>, sqlx::Error> {
        sqlx::query_as::<_, SessionUser>(
            "SELECT s.user_id, u.role, s.expires_at \
             FROM sessions s \
             JOIN users u ON u.id = s.user_id \
             WHERE s.token = $1 AND s.expires_at > NOW()",
        )
        .bind(token)
        .fetch_optional(pool)
        .await
    }
}
