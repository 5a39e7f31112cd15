//! Repository for the `dj_settings` singleton.

use sqlx::PgPool;

use crate::models::settings::{DjSettings, UpdateDjSettings};

/// Column list for `dj_settings` queries.
const COLUMNS: &str = "id, is_accepting_orders, promo_code, updated_at";

/// Provides data access for the DJ settings singleton.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Get the authoritative settings row (most recent by id).
    ///
    /// Returns `None` when no row has been written yet; callers fall back
    /// to the accepting-orders default.
    pub async fn get_latest(pool: &PgPool) -> Result<Option<DjSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dj_settings ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, DjSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update to the singleton row (id = 1), creating it on
    /// first write.
    ///
    /// Uses `ON CONFLICT (id) DO UPDATE` with `COALESCE` so only provided
    /// fields change; `updated_at` is refreshed on every write.
    pub async fn upsert(pool: &PgPool, dto: &UpdateDjSettings) -> Result<DjSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO dj_settings (id, is_accepting_orders, promo_code) \
             VALUES (1, COALESCE($1, TRUE), $2) \
             ON CONFLICT (id) DO UPDATE SET \
                 is_accepting_orders = COALESCE($1, dj_settings.is_accepting_orders), \
                 promo_code = COALESCE($2, dj_settings.promo_code), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DjSettings>(&query)
            .bind(dto.is_accepting_orders)
            .bind(&dto.promo_code)
            .fetch_one(pool)
            .await
    }
}
