//! Repository for the `appointments` table.

use carenest_core::types::DbId;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::appointment::{Appointment, CreateAppointment};

const COLUMNS: &str = "id, user_id, title, doctor, scheduled_at, attended, created_at";

/// Provides CRUD for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments (user_id, title, doctor, scheduled_at, attended, created_at)
             VALUES (?, ?, ?, ?, 0, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.doctor)
            .bind(input.scheduled_at)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// A user's appointments in schedule order (earliest first).
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments
             WHERE user_id = ?
             ORDER BY scheduled_at ASC, id ASC"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Mark an appointment attended. Returns `None` if the user has no such row.
    ///
    /// Idempotent: marking an attended appointment again returns it unchanged.
    pub async fn mark_attended(
        pool: &SqlitePool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET attended = 1
             WHERE id = ? AND user_id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
