//! `GeminiClient` against an in-process fake of the Gemini REST API.
//!
//! The fake is a one-route axum server on an ephemeral port that records
//! every request and replies with a canned status and body.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;
use carenest_core::skin::SkinAnswers;
use carenest_genai::image::InlineImage;
use carenest_genai::{GeminiClient, GeminiConfig, GenAiError, GenAiProvider};
use serde_json::{json, Value};

/// One request as the fake server saw it.
#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    reply: String,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

async fn respond(
    State(fake): State<FakeGemini>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    fake.seen.lock().unwrap().push(Recorded {
        path: uri.path().to_string(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    (fake.status, fake.reply.clone())
}

/// Start the fake and return a client pointed at it plus the request log.
async fn start_fake(status: StatusCode, reply: impl Into<String>) -> (GeminiClient, Arc<Mutex<Vec<Recorded>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(respond).with_state(FakeGemini {
        status,
        reply: reply.into(),
        seen: seen.clone(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut config = GeminiConfig::new("test-key");
    config.base_url = format!("http://{addr}");
    (GeminiClient::new(config).unwrap(), seen)
}

fn only_request(seen: &Arc<Mutex<Vec<Recorded>>>) -> Recorded {
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1, "expected exactly one upstream call");
    seen[0].clone()
}

fn answers() -> SkinAnswers {
    SkinAnswers {
        skin_type: "Oily".into(),
        sensitivity: "No".into(),
        concerns: vec!["Acne".into()],
    }
}

#[tokio::test]
async fn analyze_skin_sends_image_and_prompt() {
    let reply = json!({
        "candidates": [{"content": {"parts": [{"text": "Cleanse twice daily."}]}}]
    });
    let (client, seen) = start_fake(StatusCode::OK, reply.to_string()).await;

    let image = InlineImage::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
    let analysis = client.analyze_skin(&image, &answers()).await.unwrap();
    assert_eq!(analysis, "Cleanse twice daily.");

    let request = only_request(&seen);
    assert_eq!(request.path, "/v1beta/models/gemini-3-flash-preview:generateContent");
    assert_eq!(request.api_key.as_deref(), Some("test-key"));

    let parts = &request.body["contents"][0]["parts"];
    assert_eq!(
        parts[0]["inlineData"],
        json!({"mimeType": "image/png", "data": "iVBORw0KGgo="})
    );
    assert!(parts[1]["text"]
        .as_str()
        .unwrap()
        .contains("Skin Type: Oily, Sensitivity: No, Concerns: Acne"));
    assert!(request.body.get("generationConfig").is_none());
}

#[tokio::test]
async fn synthesize_speech_returns_inline_audio() {
    let reply = json!({
        "candidates": [{"content": {"parts": [{
            "inlineData": {"mimeType": "audio/L16;codec=pcm;rate=24000", "data": "AAAA"}
        }]}}]
    });
    let (client, seen) = start_fake(StatusCode::OK, reply.to_string()).await;

    let clip = client.synthesize_speech("Take your pills").await.unwrap();
    assert_eq!(clip.audio_base64, "AAAA");
    assert_eq!(clip.mime_type, "audio/L16;codec=pcm;rate=24000");

    let request = only_request(&seen);
    assert_eq!(request.path, "/v1beta/models/gemini-2.5-flash-preview-tts:generateContent");
    assert_eq!(
        request.body["contents"][0]["parts"][0]["text"],
        "Say clearly and gently: Take your pills"
    );
    assert_eq!(
        request.body["generationConfig"]["responseModalities"],
        json!(["AUDIO"])
    );
    assert_eq!(
        request.body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
            ["voiceName"],
        "Kore"
    );
}

#[tokio::test]
async fn upstream_error_status_is_reported() {
    let (client, _seen) = start_fake(StatusCode::FORBIDDEN, "API key invalid").await;

    let err = client.synthesize_speech("hi").await.unwrap_err();
    assert_matches!(err, GenAiError::Api { status: 403, ref body } if body == "API key invalid");
}

#[tokio::test]
async fn missing_audio_is_empty_response() {
    let reply = json!({
        "candidates": [{"content": {"parts": [{"text": "I cannot speak"}]}}]
    });
    let (client, _seen) = start_fake(StatusCode::OK, reply.to_string()).await;

    let err = client.synthesize_speech("hi").await.unwrap_err();
    assert_matches!(err, GenAiError::EmptyResponse(_));
}
