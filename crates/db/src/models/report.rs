//! Uploaded report (document) model and DTOs.

use carenest_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reports` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Server-side location; never exposed, downloads go through the API.
    #[serde(skip)]
    pub file_path: String,
    pub file_size: i64,
    pub sha256: String,
    pub uploaded_at: Timestamp,
}

/// DTO for recording a report whose file is already on disk.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub name: String,
    pub kind: String,
    pub file_path: String,
    pub file_size: i64,
    pub sha256: String,
}
