//! Repository for the `health_readings` table.

use carenest_core::types::DbId;
use carenest_core::vitals::Measurement;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::health_reading::HealthReading;

const COLUMNS: &str = "id, user_id, kind, systolic, diastolic, glucose_value, recorded_at";

/// Provides append and history queries for vital-sign readings.
pub struct HealthReadingRepo;

impl HealthReadingRepo {
    /// Store a measurement taken now.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        measurement: &Measurement,
    ) -> Result<HealthReading, sqlx::Error> {
        let (systolic, diastolic, value) = measurement.columns();
        let query = format!(
            "INSERT INTO health_readings
                (user_id, kind, systolic, diastolic, glucose_value, recorded_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HealthReading>(&query)
            .bind(user_id)
            .bind(measurement.kind())
            .bind(systolic)
            .bind(diastolic)
            .bind(value)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// The user's most recent readings, newest first.
    pub async fn list_recent(
        pool: &SqlitePool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<HealthReading>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM health_readings
             WHERE user_id = ?
             ORDER BY recorded_at DESC, id DESC
             LIMIT ?"
        );
        sqlx::query_as::<_, HealthReading>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
