//! Integration tests for the women's-care calculators.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_json_auth, register_user};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn cycle_prediction_uses_defaults(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Meera", "meera@example.com").await;

    let response = post_json_auth(
        app,
        "/api/women/cycle/predict",
        serde_json::json!({ "last_period_start": "2024-01-10" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["next_period_start"], "2024-02-07");
    assert_eq!(json["data"]["next_period_end"], "2024-02-11");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cycle_length_out_of_range_is_rejected(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Meera", "meera@example.com").await;

    let response = post_json_auth(
        app,
        "/api/women/cycle/predict",
        serde_json::json!({ "last_period_start": "2024-01-10", "cycle_length_days": 90 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pcos_assessment_counts_symptoms(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Meera", "meera@example.com").await;

    let response = post_json_auth(
        app.clone(),
        "/api/women/pcos/assess",
        serde_json::json!({ "irregular_cycles": true, "acne": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["symptom_count"], 2);

    let response = post_json_auth(app, "/api/women/pcos/assess", serde_json::json!({}), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["risk"], "Low Risk");
    assert_eq!(json["data"]["symptom_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn calculators_require_a_token(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let response = post_json(app, "/api/women/pcos/assess", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
