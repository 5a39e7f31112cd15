//! Routes for the now-playing queue, mounted at `/playlist`.
//!
//! ```text
//! GET  /  -> list_playlist
//! POST /  -> push_track (admin)
//! ```

use axum::http::Method;
use axum::routing::get;
use axum::Router;

use crate::handlers::{self, playlist};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(playlist::list_playlist)
                .post(playlist::push_track)
                .fallback(handlers::method_not_allowed),
        )
        .layer(super::resource_cors(vec![
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
}
