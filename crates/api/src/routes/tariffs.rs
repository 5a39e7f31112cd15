//! Routes for pricing tiers, mounted at `/tariffs`.
//!
//! ```text
//! GET /  -> list_tariffs
//! PUT /  -> update_tariff (admin)
//! ```

use axum::http::Method;
use axum::routing::get;
use axum::Router;

use crate::handlers::{self, tariffs};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(tariffs::list_tariffs)
                .put(tariffs::update_tariff)
                .fallback(handlers::method_not_allowed),
        )
        .layer(super::resource_cors(vec![
            Method::GET,
            Method::PUT,
            Method::OPTIONS,
        ]))
}
