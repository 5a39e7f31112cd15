//! Handlers for the DJ settings singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use trackdrop_core::error::CoreError;
use trackdrop_db::models::settings::UpdateDjSettings;
use trackdrop_db::repositories::SettingsRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/settings
///
/// Retrieve the current DJ settings. When no row has ever been written the
/// default `{"is_accepting_orders": true}` is returned.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get_latest(&state.pool).await?;

    match settings {
        Some(s) => Ok(Json(s).into_response()),
        None => Ok(Json(json!({ "is_accepting_orders": true })).into_response()),
    }
}

/// POST /api/v1/settings (admin)
///
/// Partially update the settings singleton. At least one of
/// `is_accepting_orders` / `promo_code` must be provided; omitted fields
/// keep their current value.
pub async fn update_settings(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateDjSettings>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "at least one of is_accepting_orders or promo_code must be provided".into(),
        )));
    }

    let settings = SettingsRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        is_accepting_orders = settings.is_accepting_orders,
        "DJ settings updated",
    );

    Ok(Json(settings))
}
