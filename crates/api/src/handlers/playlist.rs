//! Handlers for the now-playing queue.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use trackdrop_db::models::playlist::CreatePlaylistEntry;
use trackdrop_db::repositories::PlaylistRepo;

use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/playlist
///
/// The 10 most recent entries, newest first.
pub async fn list_playlist(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let playlist = PlaylistRepo::list_recent(&state.pool).await?;

    Ok(Json(playlist))
}

/// POST /api/v1/playlist (admin)
///
/// Push a new current track. The previous entry's playing flag is cleared
/// in the same transaction, so exactly one entry is ever playing.
pub async fn push_track(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePlaylistEntry>,
) -> AppResult<impl IntoResponse> {
    let entry = PlaylistRepo::push_current(&state.pool, &input).await?;

    tracing::info!(
        entry_id = entry.id,
        track = %entry.track_name,
        artist = %entry.artist,
        "Now playing updated",
    );

    Ok((StatusCode::CREATED, Json(entry)))
}
