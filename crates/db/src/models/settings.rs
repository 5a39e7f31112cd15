//! DJ settings models and DTOs.
//!
//! The settings table is a logical singleton gating order acceptance and
//! carrying the current promo code.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackdrop_core::types::{DbId, Timestamp};

/// A row from the `dj_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DjSettings {
    pub id: DbId,
    pub is_accepting_orders: bool,
    pub promo_code: Option<String>,
    pub updated_at: Timestamp,
}

/// DTO for a partial settings update. Fields left as `None` keep their
/// current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDjSettings {
    pub is_accepting_orders: Option<bool>,
    pub promo_code: Option<String>,
}

impl UpdateDjSettings {
    /// True when the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.is_accepting_orders.is_none() && self.promo_code.is_none()
    }
}
