//! Pricing tier models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackdrop_core::types::{DbId, Timestamp};

/// A row from the `tariff_prices` table.
///
/// `tariff_id` is the stable business key orders refer to; `id` is just
/// the surrogate row key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tariff {
    pub id: DbId,
    pub tariff_id: DbId,
    pub name: String,
    pub price: i32,
    pub time_estimate: String,
    pub updated_at: Timestamp,
}

/// DTO for the admin tariff update, addressed by business key.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTariff {
    pub tariff_id: DbId,
    pub name: String,
    pub price: i32,
    pub time_estimate: String,
}
