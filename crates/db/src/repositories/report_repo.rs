//! Repository for the `reports` table (uploaded medical documents).

use carenest_core::types::DbId;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::report::{CreateReport, Report};

const COLUMNS: &str = "id, user_id, name, kind, file_path, file_size, sha256, uploaded_at";

pub struct ReportRepo;

impl ReportRepo {
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        input: &CreateReport,
    ) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (user_id, name, kind, file_path, file_size, sha256, uploaded_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.file_path)
            .bind(input.file_size)
            .bind(&input.sha256)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// A user's reports, newest first.
    pub async fn list_for_user(pool: &SqlitePool, user_id: DbId) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports
             WHERE user_id = ?
             ORDER BY uploaded_at DESC, id DESC"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_for_user(
        pool: &SqlitePool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = ? AND user_id = ?");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete the row and hand it back so the caller can remove the file.
    pub async fn delete(
        pool: &SqlitePool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Report>, sqlx::Error> {
        let query = format!(
            "DELETE FROM reports WHERE id = ? AND user_id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
