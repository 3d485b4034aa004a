//! Skin-care questionnaire that accompanies a photo sent for analysis.

use serde::Deserialize;

use crate::error::CoreError;

pub const SKIN_TYPES: &[&str] = &["Oily", "Dry", "Combination", "Normal"];
pub const SKIN_CONCERNS: &[&str] = &[
    "Acne",
    "Pigmentation",
    "Wrinkles",
    "Dryness",
    "Redness",
    "Dark Circles",
];

/// Answers collected next to the photo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkinAnswers {
    pub skin_type: String,
    /// Free answer to "is your skin sensitive?" (the form offers Yes/No).
    pub sensitivity: String,
    #[serde(default)]
    pub concerns: Vec<String>,
}

impl SkinAnswers {
    /// Reject skin types and concerns the questionnaire does not offer.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !SKIN_TYPES.contains(&self.skin_type.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown skin type '{}'. Must be one of: {SKIN_TYPES:?}",
                self.skin_type
            )));
        }
        if let Some(bad) = self
            .concerns
            .iter()
            .find(|c| !SKIN_CONCERNS.contains(&c.as_str()))
        {
            return Err(CoreError::Validation(format!(
                "Unknown skin concern '{bad}'. Must be any of: {SKIN_CONCERNS:?}"
            )));
        }
        Ok(())
    }

    /// One-line summary embedded in the analysis prompt, e.g.
    /// `Skin Type: Oily, Sensitivity: No, Concerns: Acne, Redness`.
    pub fn summary(&self) -> String {
        format!(
            "Skin Type: {}, Sensitivity: {}, Concerns: {}",
            self.skin_type,
            self.sensitivity,
            self.concerns.join(", ")
        )
    }
}
