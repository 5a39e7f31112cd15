//! Handlers for pricing tiers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trackdrop_core::error::CoreError;
use trackdrop_db::models::tariff::UpdateTariff;
use trackdrop_db::repositories::TariffRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/tariffs
///
/// List all tariffs, highest price first.
pub async fn list_tariffs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tariffs = TariffRepo::list_all(&state.pool).await?;

    Ok(Json(tariffs))
}

/// PUT /api/v1/tariffs (admin)
///
/// Update a tariff's name, price and time estimate, addressed by business
/// key in the request body.
pub async fn update_tariff(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateTariff>,
) -> AppResult<impl IntoResponse> {
    let tariff = TariffRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tariff",
            id: input.tariff_id,
        }))?;

    tracing::info!(
        tariff_id = tariff.tariff_id,
        price = tariff.price,
        "Tariff updated",
    );

    Ok(Json(tariff))
}
