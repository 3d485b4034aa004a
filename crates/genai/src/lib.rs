//! Generative-AI integration: skin-photo analysis and text-to-speech.
//!
//! Handlers depend only on the [`GenAiProvider`] trait. [`GeminiClient`]
//! talks to the Gemini REST API; [`StubProvider`] answers deterministically
//! for tests and offline development; [`DisabledProvider`] is installed when
//! no API key is configured.

pub mod error;
pub mod gemini;
pub mod image;
pub mod provider;

pub use error::GenAiError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use provider::{DisabledProvider, GenAiProvider, SpeechClip, StubProvider};
