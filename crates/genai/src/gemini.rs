//! REST client for the Gemini `generateContent` endpoint.
//!
//! Two models are used: a vision model for skin analysis (image + text in,
//! text out) and a TTS model (text in, inline audio out).

use std::time::Duration;

use async_trait::async_trait;
use carenest_core::skin::SkinAnswers;
use serde::{Deserialize, Serialize};

use crate::error::GenAiError;
use crate::image::InlineImage;
use crate::provider::{skin_prompt, speech_prompt, GenAiProvider, SpeechClip};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_VISION_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_VOICE: &str = "Kore";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Base URL without trailing slash.
    pub base_url: String,
    pub vision_model: String,
    pub tts_model: String,
    pub voice: String,
}

impl GeminiConfig {
    /// Defaults for everything except the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            vision_model: DEFAULT_VISION_MODEL.into(),
            tts_model: DEFAULT_TTS_MODEL.into(),
            voice: DEFAULT_VOICE.into(),
        }
    }

    /// Load from environment variables. Returns `None` when
    /// `GEMINI_API_KEY` is unset or blank.
    ///
    /// | Env var               | Default                                      |
    /// |-----------------------|----------------------------------------------|
    /// | `GEMINI_API_KEY`      | (required)                                   |
    /// | `GEMINI_BASE_URL`     | `https://generativelanguage.googleapis.com`  |
    /// | `GEMINI_VISION_MODEL` | `gemini-3-flash-preview`                     |
    /// | `GEMINI_TTS_MODEL`    | `gemini-2.5-flash-preview-tts`               |
    /// | `GEMINI_VOICE`        | `Kore`                                       |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        let var_or = |name: &str, default: &str| {
            std::env::var(name).unwrap_or_else(|_| default.to_string())
        };

        Some(Self {
            api_key,
            base_url: var_or("GEMINI_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            vision_model: var_or("GEMINI_VISION_MODEL", DEFAULT_VISION_MODEL),
            tts_model: var_or("GEMINI_TTS_MODEL", DEFAULT_TTS_MODEL),
            voice: var_or("GEMINI_VOICE", DEFAULT_VOICE),
        })
    }
}

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

// ---- wire types ----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: Blob<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Blob<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

/// Subset of the `generateContent` response the client reads.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<ResponseBlob>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseBlob {
    mime_type: String,
    data: String,
}

impl GenerateResponse {
    fn parts(&self) -> impl Iterator<Item = &ResponsePart> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .into_iter()
            .flat_map(|c| c.parts.iter())
    }

    /// All text parts of the first candidate, concatenated.
    fn text(&self) -> Option<String> {
        let text: String = self.parts().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }

    /// The first inline blob of the first candidate.
    fn inline_data(&self) -> Option<&ResponseBlob> {
        self.parts().find_map(|p| p.inline_data.as_ref())
    }
}

impl GeminiClient {
    /// Build a client with its own connection pool and a request timeout.
    pub fn new(config: GeminiConfig) -> Result<Self, GenAiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    /// `POST {base}/v1beta/models/{model}:generateContent`.
    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse, GenAiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, model
        );
        tracing::debug!(%model, "Calling Gemini generateContent");

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(%model, status = status.as_u16(), "Gemini request failed");
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<GenerateResponse>().await?)
    }
}

#[async_trait]
impl GenAiProvider for GeminiClient {
    async fn analyze_skin(
        &self,
        image: &InlineImage,
        answers: &SkinAnswers,
    ) -> Result<String, GenAiError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart::InlineData {
                        inline_data: Blob {
                            mime_type: &image.mime_type,
                            data: &image.data,
                        },
                    },
                    RequestPart::Text {
                        text: skin_prompt(answers),
                    },
                ],
            }],
            generation_config: None,
        };

        self.generate(&self.config.vision_model, &request)
            .await?
            .text()
            .ok_or(GenAiError::EmptyResponse("analysis text"))
    }

    async fn synthesize_speech(&self, text: &str) -> Result<SpeechClip, GenAiError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart::Text {
                    text: speech_prompt(text),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: &self.config.voice,
                        },
                    },
                },
            }),
        };

        let response = self.generate(&self.config.tts_model, &request).await?;
        let blob = response
            .inline_data()
            .ok_or(GenAiError::EmptyResponse("audio"))?;
        Ok(SpeechClip {
            audio_base64: blob.data.clone(),
            mime_type: blob.mime_type.clone(),
        })
    }
}
