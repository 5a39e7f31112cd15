//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the corresponding repository in `trackdrop_db` and
//! map errors via [`crate::error::AppError`].

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub mod orders;
pub mod playlist;
pub mod settings;
pub mod tariffs;

/// Fallback for HTTP methods a resource does not support.
///
/// Registered as the method-router fallback on every resource so unsupported
/// methods get a JSON error body instead of axum's bare 405.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
