//! Routes for track orders, mounted at `/orders`.
//!
//! Flat endpoints, matching the front-end's one-URL-per-resource calls:
//! the PUT id travels in the body and the DELETE id in the query string.
//!
//! ```text
//! GET    /        -> list_orders
//! POST   /        -> create_order
//! PUT    /        -> update_order (admin)
//! DELETE /?id={N} -> delete_order (admin)
//! ```

use axum::http::Method;
use axum::routing::get;
use axum::Router;

use crate::handlers::{self, orders};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(orders::list_orders)
                .post(orders::create_order)
                .put(orders::update_order)
                .delete(orders::delete_order)
                .fallback(handlers::method_not_allowed),
        )
        .layer(super::resource_cors(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
}
