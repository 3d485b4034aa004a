//! Repository for the `sos_events` table.

use carenest_core::types::DbId;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::sos_event::{CreateSosEvent, SosEvent};

const COLUMNS: &str = "id, user_id, latitude, longitude, audio_path, audio_sha256, triggered_at";

/// Append-only log of SOS triggers.
pub struct SosEventRepo;

impl SosEventRepo {
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        input: &CreateSosEvent,
    ) -> Result<SosEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO sos_events
                (user_id, latitude, longitude, audio_path, audio_sha256, triggered_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SosEvent>(&query)
            .bind(user_id)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.audio_path)
            .bind(&input.audio_sha256)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// A user's SOS history, newest first.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<SosEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sos_events
             WHERE user_id = ?
             ORDER BY triggered_at DESC, id DESC
             LIMIT ?"
        );
        sqlx::query_as::<_, SosEvent>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn find_for_user(
        pool: &SqlitePool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<SosEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sos_events WHERE id = ? AND user_id = ?");
        sqlx::query_as::<_, SosEvent>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
