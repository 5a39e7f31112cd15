//! Handlers for track orders.
//!
//! Creation is customer-facing; status updates and deletion are admin-only.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use trackdrop_core::error::CoreError;
use trackdrop_core::types::DbId;
use trackdrop_db::models::order::{CreateTrackOrder, UpdateTrackOrder};
use trackdrop_db::repositories::OrderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// Query parameters for DELETE /orders.
#[derive(Debug, Deserialize)]
pub struct DeleteOrderParams {
    pub id: DbId,
}

/// GET /api/v1/orders
///
/// List all orders, newest first.
pub async fn list_orders(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::list_all(&state.pool).await?;

    Ok(Json(orders))
}

/// POST /api/v1/orders
///
/// Submit a new track order. Open to customers (no auth); missing phone
/// and celebration fields take their defaults.
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateTrackOrder>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::create(&state.pool, &input).await?;

    tracing::info!(order_id = order.id, tariff = %order.tariff, "Track order created");

    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /api/v1/orders (admin)
///
/// Update the status and payment status of one order, addressed by id in
/// the request body.
pub async fn update_order(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateTrackOrder>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::update_status(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TrackOrder",
            id: input.id,
        }))?;

    tracing::info!(
        order_id = order.id,
        status = %order.status,
        payment_status = %order.payment_status,
        "Track order updated",
    );

    Ok(Json(order))
}

/// DELETE /api/v1/orders?id={id} (admin)
///
/// Remove an order. Deleting an id that does not exist is a no-op success,
/// so repeated deletes are idempotent.
pub async fn delete_order(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<DeleteOrderParams>,
) -> AppResult<impl IntoResponse> {
    let deleted = OrderRepo::delete(&state.pool, params.id).await?;

    if deleted {
        tracing::info!(order_id = params.id, "Track order deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
