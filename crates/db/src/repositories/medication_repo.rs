//! Repository for the `medications` table.

use carenest_core::types::DbId;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::medication::{CreateMedication, Medication, TakeDoseOutcome};

const COLUMNS: &str = "id, user_id, name, dosage, frequency, doses_per_day, time_of_day, \
                       stock, refill_threshold, last_taken_at, created_at";

/// Provides CRUD and dose tracking for medications.
pub struct MedicationRepo;

impl MedicationRepo {
    /// Insert a medication for `user_id`, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        input: &CreateMedication,
    ) -> Result<Medication, sqlx::Error> {
        let query = format!(
            "INSERT INTO medications
                (user_id, name, dosage, frequency, doses_per_day, time_of_day,
                 stock, refill_threshold, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Medication>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.dosage)
            .bind(&input.frequency)
            .bind(input.doses_per_day)
            .bind(&input.time_of_day)
            .bind(input.stock)
            .bind(input.refill_threshold)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List a user's medications in insertion order.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<Medication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medications WHERE user_id = ? ORDER BY id ASC");
        sqlx::query_as::<_, Medication>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of the user's medications.
    pub async fn find_for_user(
        pool: &SqlitePool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Medication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medications WHERE id = ? AND user_id = ?");
        sqlx::query_as::<_, Medication>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Record one dose: decrement stock by one and stamp `last_taken_at`.
    ///
    /// The decrement is a single conditional UPDATE, so two concurrent
    /// doses can never drive stock below zero. When nothing was updated a
    /// follow-up lookup tells an empty bottle apart from a missing row.
    pub async fn take_dose(
        pool: &SqlitePool,
        user_id: DbId,
        id: DbId,
    ) -> Result<TakeDoseOutcome, sqlx::Error> {
        let query = format!(
            "UPDATE medications
                SET stock = stock - 1, last_taken_at = ?
              WHERE id = ? AND user_id = ? AND stock > 0
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Medication>(&query)
            .bind(Utc::now())
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        if let Some(med) = updated {
            tracing::debug!(medication_id = id, stock = med.stock, "Dose recorded");
            return Ok(TakeDoseOutcome::Taken(med));
        }

        match Self::find_for_user(pool, user_id, id).await? {
            Some(_) => Ok(TakeDoseOutcome::OutOfStock),
            None => Ok(TakeDoseOutcome::NotFound),
        }
    }

    /// Delete one of the user's medications. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM medications WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
