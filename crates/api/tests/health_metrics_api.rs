//! Integration tests for `/api/health-metrics`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, register_user};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn blood_pressure_reading_is_classified(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let response = post_json_auth(
        app,
        "/api/health-metrics",
        serde_json::json!({ "type": "bp", "systolic": 150, "diastolic": 55 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["type"], "bp");
    assert_eq!(json["data"]["systolic"], 150);
    assert_eq!(json["data"]["diastolic"], 55);
    assert!(json["data"]["value"].is_null());
    assert_eq!(json["data"]["status"], "High");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn glucose_reading_is_classified(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let response = post_json_auth(
        app,
        "/api/health-metrics",
        serde_json::json!({ "type": "sugar", "value": 65.5 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["type"], "sugar");
    assert_eq!(json["data"]["value"], 65.5);
    assert_eq!(json["data"]["status"], "Low");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_kind_and_implausible_values_are_rejected(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let unknown = post_json_auth(
        app.clone(),
        "/api/health-metrics",
        serde_json::json!({ "type": "ecg", "value": 1.0 }),
        &token,
    )
    .await;
    assert!(unknown.status().is_client_error());

    let zero = post_json_auth(
        app,
        "/api/health-metrics",
        serde_json::json!({ "type": "bp", "systolic": 0, "diastolic": 80 }),
        &token,
    )
    .await;
    assert_eq!(zero.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_newest_first_and_limited(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    for value in [90.0, 100.0, 200.0] {
        let response = post_json_auth(
            app.clone(),
            "/api/health-metrics",
            serde_json::json!({ "type": "sugar", "value": value }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get_auth(app, "/api/health-metrics?limit=2", &token).await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["value"], 200.0);
    assert_eq!(data[0]["status"], "High");
    assert_eq!(data[1]["value"], 100.0);
}
