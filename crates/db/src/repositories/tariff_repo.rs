//! Repository for the `tariff_prices` table.

use sqlx::PgPool;

use crate::models::tariff::{Tariff, UpdateTariff};

/// Column list for `tariff_prices` queries.
const COLUMNS: &str = "id, tariff_id, name, price, time_estimate, updated_at";

/// Provides data access for pricing tiers.
pub struct TariffRepo;

impl TariffRepo {
    /// List all tariffs, highest price first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Tariff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tariff_prices ORDER BY price DESC");
        sqlx::query_as::<_, Tariff>(&query).fetch_all(pool).await
    }

    /// Update one tariff by its business key, refreshing `updated_at`.
    ///
    /// Returns `None` when no tariff with that `tariff_id` exists.
    pub async fn update(pool: &PgPool, dto: &UpdateTariff) -> Result<Option<Tariff>, sqlx::Error> {
        let query = format!(
            "UPDATE tariff_prices \
             SET name = $2, price = $3, time_estimate = $4, updated_at = NOW() \
             WHERE tariff_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tariff>(&query)
            .bind(dto.tariff_id)
            .bind(&dto.name)
            .bind(dto.price)
            .bind(&dto.time_estimate)
            .fetch_optional(pool)
            .await
    }
}
