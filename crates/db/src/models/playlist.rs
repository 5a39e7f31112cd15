//! Now-playing queue models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackdrop_core::types::{DbId, Timestamp};

/// A row from the `current_playlist` table.
///
/// At most one row has `is_playing = true`; rows are only superseded,
/// never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlaylistEntry {
    pub id: DbId,
    pub track_name: String,
    pub artist: String,
    pub is_playing: bool,
    pub added_at: Timestamp,
}

/// DTO for pushing a new current track.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistEntry {
    pub track_name: String,
    pub artist: String,
}
