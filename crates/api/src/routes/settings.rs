//! Routes for the DJ settings singleton, mounted at `/settings`.
//!
//! ```text
//! GET  /  -> get_settings
//! POST /  -> update_settings (admin)
//! ```

use axum::http::Method;
use axum::routing::get;
use axum::Router;

use crate::handlers::{self, settings};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(settings::get_settings)
                .post(settings::update_settings)
                .fallback(handlers::method_not_allowed),
        )
        .layer(super::resource_cors(vec![
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
}
