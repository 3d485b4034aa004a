//! Appointment entity model and DTOs.

use carenest_core::appointments::Scheduled;
use carenest_core::types::{DbId, Timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `appointments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub title: String,
    pub doctor: Option<String>,
    /// Local wall-clock time as entered; no timezone.
    pub scheduled_at: NaiveDateTime,
    pub attended: bool,
    pub created_at: Timestamp,
}

impl Scheduled for Appointment {
    fn title(&self) -> &str {
        &self.title
    }

    fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }

    fn attended(&self) -> bool {
        self.attended
    }
}

/// DTO for inserting an appointment.
#[derive(Debug, Clone)]
pub struct CreateAppointment {
    pub title: String,
    pub doctor: Option<String>,
    pub scheduled_at: NaiveDateTime,
}
