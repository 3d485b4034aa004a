//! Integration tests for the AI-backed endpoints: `/api/assistant/speak`
//! and `/api/skin/analyze`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use carenest_genai::DisabledProvider;
use common::{body_json, post_json_auth, register_user};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// 1x1 transparent PNG.
const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

fn skin_body(image: &str) -> serde_json::Value {
    serde_json::json!({
        "image": image,
        "answers": {
            "skin_type": "Oily",
            "sensitivity": "No",
            "concerns": ["Acne", "Redness"],
        },
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn speak_returns_audio_clip(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let response = post_json_auth(
        app,
        "/api/assistant/speak",
        serde_json::json!({ "text": "Time for your evening tablets" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["mime_type"], "audio/wav");
    assert_eq!(json["data"]["audio_base64"], "UklGRg==");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_text_is_rejected(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let response = post_json_auth(
        app,
        "/api/assistant/speak",
        serde_json::json!({ "text": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn skin_analysis_echoes_answers(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let response = post_json_auth(app, "/api/skin/analyze", skin_body(PNG_DATA_URL), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let analysis = body_json(response).await["data"]["analysis"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(analysis.contains("image/png"), "{analysis}");
    assert!(analysis.contains("Skin Type: Oily"), "{analysis}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn skin_analysis_rejects_bad_input(pool: SqlitePool) {
    let (app, _uploads) = common::build_test_app(pool);
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let response = post_json_auth(app.clone(), "/api/skin/analyze", skin_body("%%%"), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_IMAGE");

    let mut body = skin_body(PNG_DATA_URL);
    body["answers"]["skin_type"] = "Scaly".into();
    let response = post_json_auth(app, "/api/skin/analyze", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

/// Without an API key the AI endpoints answer 503 rather than failing
/// opaquely.
#[sqlx::test(migrations = "../db/migrations")]
async fn disabled_provider_is_503(pool: SqlitePool) {
    let dir = TempDir::new().unwrap();
    let app =
        common::build_test_app_with(pool, Arc::new(DisabledProvider), dir.path().to_path_buf());
    let token = register_user(app.clone(), "Asha", "asha@example.com").await;

    let response = post_json_auth(
        app.clone(),
        "/api/assistant/speak",
        serde_json::json!({ "text": "Hello" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "AI_UNAVAILABLE");

    let response = post_json_auth(app, "/api/skin/analyze", skin_body(PNG_DATA_URL), &token).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
