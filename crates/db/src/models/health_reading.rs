//! Health reading entity model.

use carenest_core::error::CoreError;
use carenest_core::types::{DbId, Timestamp};
use carenest_core::vitals::{HealthReading as Reading, Measurement};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `health_readings` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct HealthReading {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    #[serde(rename = "type")]
    pub kind: String,
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    #[serde(rename = "value")]
    pub glucose_value: Option<f64>,
    pub recorded_at: Timestamp,
}

impl HealthReading {
    /// Typed view of the stored columns.
    pub fn measurement(&self) -> Result<Measurement, CoreError> {
        Measurement::from_columns(&self.kind, self.systolic, self.diastolic, self.glucose_value)
    }

    /// Snapshot handed to the threshold evaluator.
    pub fn to_reading(&self) -> Result<Reading, CoreError> {
        Ok(Reading {
            measurement: self.measurement()?,
            recorded_at: self.recorded_at,
        })
    }
}
