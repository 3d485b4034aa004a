//! PCOS/PCOD symptom questionnaire scoring.
//!
//! A screening aid only: counts reported symptoms and buckets the count.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Yes/no answers from the questionnaire. Missing answers count as "no".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PcosAnswers {
    pub irregular_cycles: bool,
    pub weight_gain: bool,
    pub excess_hair: bool,
    pub acne: bool,
    pub hair_thinning: bool,
    pub mood_swings: bool,
}

impl PcosAnswers {
    /// Number of symptoms answered "yes".
    pub fn symptom_count(&self) -> u8 {
        [
            self.irregular_cycles,
            self.weight_gain,
            self.excess_hair,
            self.acne,
            self.hair_thinning,
            self.mood_swings,
        ]
        .into_iter()
        .map(u8::from)
        .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum PcosRisk {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

/// 0–1 symptoms is low, 2–3 medium, 4 or more high.
pub fn assess(answers: &PcosAnswers) -> PcosRisk {
    match answers.symptom_count() {
        0..=1 => PcosRisk::Low,
        2..=3 => PcosRisk::Medium,
        _ => PcosRisk::High,
    }
}
