//! Admin authorization extractor.
//!
//! Mutation endpoints are gated by a shared-secret header, not a session or
//! token scheme: the `X-Admin-Auth` header must exactly match the configured
//! admin password. Use the extractor in route handlers to enforce this at
//! the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use trackdrop_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the shared-secret header. Header-name lookup is case-insensitive;
/// the value comparison is exact.
pub const ADMIN_AUTH_HEADER: &str = "x-admin-auth";

/// Requires a valid `X-Admin-Auth` header. Rejects with 401 otherwise.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     // the caller presented the admin secret
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(ADMIN_AUTH_HEADER)
            .and_then(|value| value.to_str().ok());

        match presented {
            Some(secret) if secret == state.config.admin_password => Ok(RequireAdmin),
            _ => Err(AppError::Core(CoreError::Unauthorized(
                "Unauthorized".into(),
            ))),
        }
    }
}
