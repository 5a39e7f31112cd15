//! Repository for the `track_orders` table.

use sqlx::PgPool;
use trackdrop_core::types::DbId;

use crate::models::order::{CreateTrackOrder, TrackOrder, UpdateTrackOrder};

/// Column list for `track_orders` queries.
const COLUMNS: &str = "\
    id, track_name, artist, customer_name, customer_phone, tariff, price, \
    has_celebration, celebration_text, status, payment_status, created_at";

/// Provides data access for track orders.
pub struct OrderRepo;

impl OrderRepo {
    /// List all orders, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TrackOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM track_orders ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, TrackOrder>(&query).fetch_all(pool).await
    }

    /// Insert a customer order. Status and payment status take their
    /// column defaults (`pending` / `unpaid`).
    pub async fn create(pool: &PgPool, dto: &CreateTrackOrder) -> Result<TrackOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO track_orders \
                 (track_name, artist, customer_name, customer_phone, tariff, price, \
                  has_celebration, celebration_text) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackOrder>(&query)
            .bind(&dto.track_name)
            .bind(&dto.artist)
            .bind(&dto.customer_name)
            .bind(&dto.customer_phone)
            .bind(&dto.tariff)
            .bind(dto.price)
            .bind(dto.has_celebration)
            .bind(&dto.celebration_text)
            .fetch_one(pool)
            .await
    }

    /// Update the workflow fields of one order.
    ///
    /// Returns `None` when no order with that id exists.
    pub async fn update_status(
        pool: &PgPool,
        dto: &UpdateTrackOrder,
    ) -> Result<Option<TrackOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE track_orders SET status = $2, payment_status = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackOrder>(&query)
            .bind(dto.id)
            .bind(&dto.status)
            .bind(&dto.payment_status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order by id. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM track_orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
