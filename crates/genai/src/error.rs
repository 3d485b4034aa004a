/// Errors from the generative-AI layer.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// No API key was configured, so AI features are switched off.
    #[error("Generative AI is not configured")]
    NotConfigured,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream API returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The upstream answered 2xx but without the expected content part.
    #[error("Gemini returned no {0}")]
    EmptyResponse(&'static str),

    /// The image supplied for analysis is not usable base64 image data.
    #[error("Invalid image: {0}")]
    InvalidImage(String),
}
