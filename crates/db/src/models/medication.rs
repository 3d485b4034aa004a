//! Medication entity model and DTOs.

use carenest_core::medication::StockLevel;
use carenest_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `medications` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Medication {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub name: String,
    pub dosage: Option<String>,
    /// Form label such as `"Daily"` or `"Twice Daily"`.
    pub frequency: String,
    pub doses_per_day: i32,
    /// Preferred time of day, as typed (e.g. `"08:00"`).
    pub time_of_day: Option<String>,
    pub stock: i32,
    pub refill_threshold: i32,
    pub last_taken_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl StockLevel for Medication {
    fn name(&self) -> &str {
        &self.name
    }

    fn stock_units(&self) -> i32 {
        self.stock
    }

    fn refill_threshold(&self) -> i32 {
        self.refill_threshold
    }
}

/// DTO for inserting a medication. Fields are validated by the caller.
#[derive(Debug, Clone)]
pub struct CreateMedication {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: String,
    pub doses_per_day: i32,
    pub time_of_day: Option<String>,
    pub stock: i32,
    pub refill_threshold: i32,
}

/// Outcome of [`crate::repositories::MedicationRepo::take_dose`].
#[derive(Debug, Clone, PartialEq)]
pub enum TakeDoseOutcome {
    Taken(Medication),
    OutOfStock,
    NotFound,
}
