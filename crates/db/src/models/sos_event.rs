//! SOS event model and DTOs.

use carenest_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sos_events` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SosEvent {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip)]
    pub audio_path: Option<String>,
    pub audio_sha256: Option<String>,
    pub triggered_at: Timestamp,
}

impl SosEvent {
    pub fn has_audio(&self) -> bool {
        self.audio_path.is_some()
    }
}

/// DTO for inserting an SOS event.
#[derive(Debug, Clone)]
pub struct CreateSosEvent {
    pub latitude: f64,
    pub longitude: f64,
    pub audio_path: Option<String>,
    pub audio_sha256: Option<String>,
}
