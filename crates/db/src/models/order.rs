//! Track order models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackdrop_core::types::{DbId, Timestamp};

/// A row from the `track_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrackOrder {
    pub id: DbId,
    pub track_name: String,
    pub artist: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub tariff: String,
    pub price: i32,
    pub has_celebration: bool,
    pub celebration_text: Option<String>,
    pub status: String,
    pub payment_status: String,
    pub created_at: Timestamp,
}

/// DTO for a customer order submission.
///
/// Phone and celebration fields are optional on the wire: a missing phone
/// becomes the empty string and a missing celebration flag becomes false.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrackOrder {
    pub track_name: String,
    pub artist: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    pub tariff: String,
    pub price: i32,
    #[serde(default)]
    pub has_celebration: bool,
    #[serde(default)]
    pub celebration_text: Option<String>,
}

/// DTO for the admin status update. Only the two workflow fields are
/// mutable after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrackOrder {
    pub id: DbId,
    pub status: String,
    pub payment_status: String,
}
