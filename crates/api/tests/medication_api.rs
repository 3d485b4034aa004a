//! Integration tests for `/api/medications`: stock tracking, dose taking,
//! and refill projection.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_auth, post_json_auth, register_user};
use sqlx::SqlitePool;

async fn add_medication(app: axum::Router, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(app, "/api/medications", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_applies_frequency_and_threshold_defaults(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let med = add_medication(
        app,
        &token,
        serde_json::json!({
            "name": "Metformin",
            "dosage": "500mg",
            "frequency": "Twice Daily",
            "time": "08:00",
            "stock": 30,
        }),
    )
    .await;

    assert_eq!(med["name"], "Metformin");
    assert_eq!(med["doses_per_day"], 2);
    assert_eq!(med["refill_threshold"], 5);
    assert_eq!(med["time_of_day"], "08:00");
    assert_eq!(med["days_remaining"], 15);
    assert_eq!(med["is_low_stock"], false);
    assert_eq!(med["taken_today"], false);
    assert!(med.get("user_id").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_stock_is_rejected(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let response = post_json_auth(
        app,
        "/api/medications",
        serde_json::json!({ "name": "Aspirin", "stock": -1 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

/// Taking doses decrements stock one at a time and stops at zero.
#[sqlx::test(migrations = "../db/migrations")]
async fn take_decrements_until_out_of_stock(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;
    let med = add_medication(
        app.clone(),
        &token,
        serde_json::json!({ "name": "Insulin", "stock": 2, "refill_threshold": 1 }),
    )
    .await;
    let uri = format!("/api/medications/{}/take", med["id"]);

    let first = post_auth(app.clone(), &uri, &token).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first = body_json(first).await;
    assert_eq!(first["data"]["stock"], 1);
    assert_eq!(first["data"]["taken_today"], true);
    assert_eq!(first["data"]["is_low_stock"], true);
    assert!(first["data"]["last_taken_at"].is_string());

    let second = post_auth(app.clone(), &uri, &token).await;
    assert_eq!(body_json(second).await["data"]["stock"], 0);

    let third = post_auth(app, &uri, &token).await;
    assert_eq!(third.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn refill_estimate_uses_requested_date(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;
    let med = add_medication(
        app.clone(),
        &token,
        serde_json::json!({ "name": "Statin", "stock": 30 }),
    )
    .await;

    let uri = format!("/api/medications/{}/refill?date=2024-01-01", med["id"]);
    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["days_remaining"], 30);
    assert_eq!(json["data"]["refill_date"], "2024-01-31");
}

/// One user's medications are invisible to another.
#[sqlx::test(migrations = "../db/migrations")]
async fn medications_are_scoped_to_owner(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let owner = register_user(app.clone(), "Asha", "asha@example.com").await;
    let other = register_user(app.clone(), "Ravi", "ravi@example.com").await;
    let med = add_medication(
        app.clone(),
        &owner,
        serde_json::json!({ "name": "Insulin", "stock": 10 }),
    )
    .await;

    let list = body_json(get_auth(app.clone(), "/api/medications", &other).await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);

    let take = post_auth(app.clone(), &format!("/api/medications/{}/take", med["id"]), &other).await;
    assert_eq!(take.status(), StatusCode::NOT_FOUND);

    let delete = delete_auth(app, &format!("/api/medications/{}", med["id"]), &other).await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_in_insertion_order_and_delete_removes(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;
    let first = add_medication(app.clone(), &token, serde_json::json!({ "name": "A", "stock": 10 })).await;
    add_medication(app.clone(), &token, serde_json::json!({ "name": "B", "stock": 10 })).await;

    let list = body_json(get_auth(app.clone(), "/api/medications", &token).await).await;
    let names: Vec<_> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["A", "B"]);

    let response = delete_auth(app.clone(), &format!("/api/medications/{}", first["id"]), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = body_json(get_auth(app, "/api/medications", &token).await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

/// Create, take and list all compute their derived figures for the same
/// client-supplied day.
#[sqlx::test(migrations = "../db/migrations")]
async fn every_response_honours_the_client_date(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let response = post_json_auth(
        app.clone(),
        "/api/medications?date=2030-01-01",
        serde_json::json!({ "name": "Statin", "frequency": "Daily", "stock": 30 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["refill_date"], "2030-01-31");

    let uri = format!("/api/medications/{}/take?date=2030-01-01", created["id"]);
    let response = post_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let taken = body_json(response).await["data"].clone();
    assert_eq!(taken["refill_date"], "2030-01-30");

    let listed = body_json(get_auth(app, "/api/medications?date=2030-01-01", &token).await).await
        ["data"][0]
        .clone();
    assert_eq!(listed["refill_date"], taken["refill_date"]);
    assert_eq!(listed["taken_today"], taken["taken_today"]);
}
