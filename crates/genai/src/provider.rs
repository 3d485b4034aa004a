//! The provider seam between handlers and the AI backend.

use async_trait::async_trait;
use carenest_core::skin::SkinAnswers;
use serde::Serialize;

use crate::error::GenAiError;
use crate::image::InlineImage;

/// Style instruction prepended to everything spoken aloud.
pub const SPEECH_STYLE_PREFIX: &str = "Say clearly and gently: ";

/// Synthesised speech, base64-encoded for transport in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechClip {
    pub audio_base64: String,
    pub mime_type: String,
}

/// One method per AI use case.
#[async_trait]
pub trait GenAiProvider: Send + Sync {
    /// Analyse a skin photo together with the questionnaire answers and
    /// return a readable routine recommendation.
    async fn analyze_skin(
        &self,
        image: &InlineImage,
        answers: &SkinAnswers,
    ) -> Result<String, GenAiError>;

    /// Turn text into speech. Implementations apply [`SPEECH_STYLE_PREFIX`].
    async fn synthesize_speech(&self, text: &str) -> Result<SpeechClip, GenAiError>;
}

/// Prompt sent with the skin photo.
pub fn skin_prompt(answers: &SkinAnswers) -> String {
    format!(
        "You are an AI Skin Care Specialist. Analyze this skin photo and these user answers: {}. \
         Identify possible concerns (acne, dryness, oiliness, pigmentation) and recommend a daily \
         skincare routine. Also, warn about comedogenic ingredients if relevant. \
         Format the response in a structured JSON-like way but as a readable string.",
        answers.summary()
    )
}

/// Text actually handed to the speech model.
pub fn speech_prompt(text: &str) -> String {
    format!("{SPEECH_STYLE_PREFIX}{text}")
}

/// Installed when no API key is configured: every call fails with
/// [`GenAiError::NotConfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledProvider;

#[async_trait]
impl GenAiProvider for DisabledProvider {
    async fn analyze_skin(&self, _: &InlineImage, _: &SkinAnswers) -> Result<String, GenAiError> {
        Err(GenAiError::NotConfigured)
    }

    async fn synthesize_speech(&self, _: &str) -> Result<SpeechClip, GenAiError> {
        Err(GenAiError::NotConfigured)
    }
}

/// Deterministic offline provider.
///
/// The analysis echoes the answer summary; speech returns a tiny WAV header
/// (`RIFF`) so clients can exercise their playback path.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubProvider;

/// Base64 of the four bytes `RIFF`.
const STUB_AUDIO_BASE64: &str = "UklGRg==";

#[async_trait]
impl GenAiProvider for StubProvider {
    async fn analyze_skin(
        &self,
        image: &InlineImage,
        answers: &SkinAnswers,
    ) -> Result<String, GenAiError> {
        Ok(format!(
            "Stub analysis of a {} photo. {}",
            image.mime_type,
            answers.summary()
        ))
    }

    async fn synthesize_speech(&self, text: &str) -> Result<SpeechClip, GenAiError> {
        tracing::debug!(prompt = %speech_prompt(text), "Stub speech synthesis");
        Ok(SpeechClip {
            audio_base64: STUB_AUDIO_BASE64.into(),
            mime_type: "audio/wav".into(),
        })
    }
}
