//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router,
//! built through the same [`build_app_router`] the production binary uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use trackdrop_api::config::ServerConfig;
use trackdrop_api::router::build_app_router;
use trackdrop_api::state::AppState;

/// Admin secret used by the test configuration.
pub const TEST_ADMIN_PASSWORD: &str = "test-admin-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (per-resource CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON request with an optional `X-Admin-Auth` header value.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: Value,
    admin_secret: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(secret) = admin_secret {
        builder = builder.header("X-Admin-Auth", secret);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an unauthenticated JSON POST (customer-facing routes).
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body, None).await
}

/// Send a JSON POST with the valid admin secret.
pub async fn post_json_admin(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body, Some(TEST_ADMIN_PASSWORD)).await
}

/// Send a JSON PUT with the valid admin secret.
pub async fn put_json_admin(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body, Some(TEST_ADMIN_PASSWORD)).await
}

/// Send a DELETE with an optional `X-Admin-Auth` header value.
pub async fn delete(app: Router, uri: &str, admin_secret: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::DELETE).uri(uri);
    if let Some(secret) = admin_secret {
        builder = builder.header("X-Admin-Auth", secret);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a CORS preflight (OPTIONS with origin and requested method).
pub async fn preflight(app: Router, uri: &str, request_method: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, request_method)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
