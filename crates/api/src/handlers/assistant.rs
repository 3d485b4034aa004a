//! Handler for `/assistant/speak`: read arbitrary text aloud.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use carenest_genai::SpeechClip;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const MAX_SPEECH_CHARS: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
}

/// POST /api/assistant/speak
pub async fn speak(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<SpeakRequest>,
) -> AppResult<Json<DataResponse<SpeechClip>>> {
    let text = input.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("Text to speak is required".into()));
    }
    if text.chars().count() > MAX_SPEECH_CHARS {
        return Err(AppError::BadRequest(format!(
            "Text to speak must be at most {MAX_SPEECH_CHARS} characters"
        )));
    }

    tracing::debug!(user_id = auth.user_id, chars = text.len(), "Synthesising speech");
    let clip = state.genai.synthesize_speech(text).await?;
    Ok(Json(DataResponse { data: clip }))
}
