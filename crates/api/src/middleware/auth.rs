//! Session-cookie authentication extractor.
//!
//! Sessions are issued by an external identity collaborator and stored in
//! the `sessions` table; this extractor only looks them up. Permission
//! gating uses the in-memory role table in `vca_core::roles`.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use vca_core::error::CoreError;
use vca_core::roles;
use vca_core::types::DbId;
use vca_db::repositories::SessionRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the session cookie set by the identity collaborator.
pub const SESSION_COOKIE: &str = "vca_session";

/// Authenticated user resolved from the session cookie.
///
/// Use as an extractor parameter in any handler that requires a signed-in
/// user, then gate on a permission:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     auth.require(roles::PERM_DOCUMENTS_READ)?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's database id.
    pub user_id: DbId,
    /// The user's role name (e.g. `"admin"`, `"analyst"`, `"viewer"`).
    pub role: String,
}

impl AuthUser {
    /// Fail with `Forbidden` unless this user's role holds `permission`.
    pub fn require(&self, permission: &str) -> Result<(), CoreError> {
        if roles::role_has_permission(&self.role, permission) {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!(
                "Role '{}' lacks permission '{permission}'",
                self.role
            )))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
            })?;

        let token = session_token(cookie_header).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
        })?;

        let session = SessionRepo::find_valid(&state.pool, token)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        Ok(AuthUser {
            user_id: session.user_id,
            role: session.role,
        })
    }
}

/// Extract the session token from a `Cookie` header value.
fn session_token(header: &str) -> Option<&str> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
