//! HTTP-level integration tests for the `/tariffs` endpoints.
//!
//! The seed migration provides three tariffs (Standard 500, Express 1000,
//! VIP 2000) with business keys 1..3.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, get, put_json_admin, send_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET lists the seeded tariffs, highest price first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tariffs_by_price(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/tariffs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tariffs = json.as_array().unwrap();
    assert_eq!(tariffs.len(), 3);
    assert_eq!(tariffs[0]["name"], "VIP");
    assert_eq!(tariffs[1]["name"], "Express");
    assert_eq!(tariffs[2]["name"], "Standard");
}

// ---------------------------------------------------------------------------
// Test: PUT without auth is rejected and stores nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_tariff_requires_auth(pool: PgPool) {
    let response = send_json(
        build_test_app(pool.clone()),
        Method::PUT,
        "/api/v1/tariffs",
        json!({ "tariff_id": 2, "name": "Hacked", "price": 1, "time_estimate": "now" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(get(build_test_app(pool), "/api/v1/tariffs").await).await;
    assert!(
        json.as_array()
            .unwrap()
            .iter()
            .all(|t| t["name"] != "Hacked"),
        "no tariff may change without auth"
    );
}

// ---------------------------------------------------------------------------
// Test: authorized PUT updates exactly the addressed tariff
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_tariff(pool: PgPool) {
    let response = put_json_admin(
        build_test_app(pool.clone()),
        "/api/v1/tariffs",
        json!({ "tariff_id": 2, "name": "Express+", "price": 750, "time_estimate": "5 min" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["tariff_id"], 2);
    assert_eq!(json["name"], "Express+");
    assert_eq!(json["price"], 750);
    assert_eq!(json["time_estimate"], "5 min");

    // The other rows are untouched.
    let json = body_json(get(build_test_app(pool), "/api/v1/tariffs").await).await;
    let tariffs = json.as_array().unwrap();
    let standard = tariffs.iter().find(|t| t["tariff_id"] == 1).unwrap();
    let vip = tariffs.iter().find(|t| t["tariff_id"] == 3).unwrap();
    assert_eq!(standard["price"], 500);
    assert_eq!(vip["price"], 2000);
}

// ---------------------------------------------------------------------------
// Test: repeating the identical PUT yields the same row (bar updated_at)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_tariff_idempotent(pool: PgPool) {
    let body = json!({ "tariff_id": 2, "name": "Express", "price": 750, "time_estimate": "5 min" });

    let first = body_json(
        put_json_admin(build_test_app(pool.clone()), "/api/v1/tariffs", body.clone()).await,
    )
    .await;
    let second =
        body_json(put_json_admin(build_test_app(pool), "/api/v1/tariffs", body).await).await;

    for field in ["id", "tariff_id", "name", "price", "time_estimate"] {
        assert_eq!(first[field], second[field], "field {field} must not drift");
    }
}

// ---------------------------------------------------------------------------
// Test: PUT on an unknown business key is a 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_tariff_not_found(pool: PgPool) {
    let response = put_json_admin(
        build_test_app(pool),
        "/api/v1/tariffs",
        json!({ "tariff_id": 99, "name": "Ghost", "price": 1, "time_estimate": "never" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
