//! Repository for the `current_playlist` table.

use sqlx::PgPool;

use crate::models::playlist::{CreatePlaylistEntry, PlaylistEntry};

/// Column list for `current_playlist` queries.
const COLUMNS: &str = "id, track_name, artist, is_playing, added_at";

/// Provides data access for the now-playing queue.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// The 10 most recent entries, newest first.
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<PlaylistEntry>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM current_playlist ORDER BY added_at DESC, id DESC LIMIT 10");
        sqlx::query_as::<_, PlaylistEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Push a new current track.
    ///
    /// Clears `is_playing` on every existing entry and inserts the new one
    /// as playing. Both statements run in one transaction so no reader
    /// observes zero or two playing rows.
    pub async fn push_current(
        pool: &PgPool,
        dto: &CreatePlaylistEntry,
    ) -> Result<PlaylistEntry, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE current_playlist SET is_playing = FALSE WHERE is_playing")
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO current_playlist (track_name, artist, is_playing) \
             VALUES ($1, $2, TRUE) \
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, PlaylistEntry>(&query)
            .bind(&dto.track_name)
            .bind(&dto.artist)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(entry)
    }
}
