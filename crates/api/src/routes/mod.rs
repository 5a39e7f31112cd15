//! Route definitions, one submodule per resource.
//!
//! Each resource router carries its own CORS layer so the preflight
//! advertises exactly the methods that resource supports. The layer also
//! short-circuits OPTIONS before any handler or database access runs.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware::admin::ADMIN_AUTH_HEADER;
use crate::state::AppState;

pub mod health;
pub mod orders;
pub mod playlist;
pub mod settings;
pub mod tariffs;

/// All `/api/v1` routes.
///
/// ```text
/// /settings    get, update (POST)
/// /orders      list, create, update (PUT), delete
/// /playlist    list, push (POST)
/// /tariffs     list, update (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/settings", settings::router())
        .nest("/orders", orders::router())
        .nest("/playlist", playlist::router())
        .nest("/tariffs", tariffs::router())
}

/// Build the CORS layer for one resource.
///
/// Origin is `*` (no credentials), the shared-secret admin header is
/// allowed, and preflight responses are cacheable for 86400 seconds.
pub(crate) fn resource_cors(methods: Vec<Method>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(methods)
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(ADMIN_AUTH_HEADER)])
        .max_age(Duration::from_secs(86400))
}
