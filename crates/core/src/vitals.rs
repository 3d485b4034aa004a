//! Blood-pressure and glucose reading classification.
//!
//! Pure logic, no database access. The caller fetches readings and passes
//! them in; classification uses fixed clinical cutoffs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Systolic pressure (mmHg) above which a reading is high.
pub const SYSTOLIC_HIGH: i32 = 140;
/// Diastolic pressure (mmHg) above which a reading is high.
pub const DIASTOLIC_HIGH: i32 = 90;
/// Systolic pressure (mmHg) below which a reading is low.
pub const SYSTOLIC_LOW: i32 = 90;
/// Diastolic pressure (mmHg) below which a reading is low.
pub const DIASTOLIC_LOW: i32 = 60;

/// Blood glucose (mg/dL) above which a reading is high.
pub const GLUCOSE_HIGH: f64 = 180.0;
/// Blood glucose (mg/dL) below which a reading is low.
pub const GLUCOSE_LOW: f64 = 70.0;

/// Storage label for blood-pressure readings.
pub const KIND_BLOOD_PRESSURE: &str = "bp";
/// Storage label for glucose readings.
pub const KIND_GLUCOSE: &str = "sugar";

const MAX_SYSTOLIC: i32 = 300;
const MAX_DIASTOLIC: i32 = 200;
const MAX_GLUCOSE: f64 = 1000.0;

/// Classification of a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VitalStatus {
    Normal,
    High,
    Low,
}

/// The measured value(s) of a reading.
///
/// Encodes the "exactly one of (systolic & diastolic) or glucose value"
/// invariant in the type. The serde form is the tagged request body the SPA
/// posts: `{"type":"bp","systolic":120,"diastolic":80}` or
/// `{"type":"sugar","value":95.5}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Measurement {
    #[serde(rename = "bp")]
    BloodPressure { systolic: i32, diastolic: i32 },
    #[serde(rename = "sugar")]
    Glucose { value: f64 },
}

impl Measurement {
    /// Storage label (`"bp"` or `"sugar"`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BloodPressure { .. } => KIND_BLOOD_PRESSURE,
            Self::Glucose { .. } => KIND_GLUCOSE,
        }
    }

    /// Rebuild a measurement from its nullable storage columns.
    ///
    /// Fails when the populated columns do not match `kind`.
    pub fn from_columns(
        kind: &str,
        systolic: Option<i32>,
        diastolic: Option<i32>,
        value: Option<f64>,
    ) -> Result<Self, CoreError> {
        match (kind, systolic, diastolic, value) {
            (KIND_BLOOD_PRESSURE, Some(systolic), Some(diastolic), None) => {
                Ok(Self::BloodPressure {
                    systolic,
                    diastolic,
                })
            }
            (KIND_GLUCOSE, None, None, Some(value)) => Ok(Self::Glucose { value }),
            (KIND_BLOOD_PRESSURE | KIND_GLUCOSE, ..) => Err(CoreError::Validation(format!(
                "Reading columns do not match kind '{kind}'"
            ))),
            (other, ..) => Err(CoreError::Validation(format!(
                "Unknown reading kind '{other}'. Must be one of: bp, sugar"
            ))),
        }
    }

    /// Split into `(systolic, diastolic, value)` storage columns.
    pub fn columns(&self) -> (Option<i32>, Option<i32>, Option<f64>) {
        match *self {
            Self::BloodPressure {
                systolic,
                diastolic,
            } => (Some(systolic), Some(diastolic), None),
            Self::Glucose { value } => (None, None, Some(value)),
        }
    }

    /// Reject values no meter can produce (non-positive, NaN, absurdly large).
    pub fn validate(&self) -> Result<(), CoreError> {
        match *self {
            Self::BloodPressure {
                systolic,
                diastolic,
            } => {
                if !(1..=MAX_SYSTOLIC).contains(&systolic) {
                    return Err(CoreError::Validation(format!(
                        "Systolic must be between 1 and {MAX_SYSTOLIC} mmHg"
                    )));
                }
                if !(1..=MAX_DIASTOLIC).contains(&diastolic) {
                    return Err(CoreError::Validation(format!(
                        "Diastolic must be between 1 and {MAX_DIASTOLIC} mmHg"
                    )));
                }
                Ok(())
            }
            Self::Glucose { value } => {
                if !(value > 0.0 && value <= MAX_GLUCOSE) {
                    return Err(CoreError::Validation(format!(
                        "Glucose must be greater than 0 and at most {MAX_GLUCOSE} mg/dL"
                    )));
                }
                Ok(())
            }
        }
    }
}

/// A single timestamped blood-pressure or glucose measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthReading {
    pub measurement: Measurement,
    pub recorded_at: Timestamp,
}

/// Classify a reading against the fixed cutoffs.
///
/// High takes precedence when a blood-pressure pair is both high on one
/// side and low on the other (e.g. 150/55).
pub fn classify(reading: &HealthReading) -> VitalStatus {
    classify_measurement(&reading.measurement)
}

/// Classify a bare measurement. See [`classify`].
pub fn classify_measurement(measurement: &Measurement) -> VitalStatus {
    match *measurement {
        Measurement::BloodPressure {
            systolic,
            diastolic,
        } => {
            if systolic > SYSTOLIC_HIGH || diastolic > DIASTOLIC_HIGH {
                VitalStatus::High
            } else if systolic < SYSTOLIC_LOW || diastolic < DIASTOLIC_LOW {
                VitalStatus::Low
            } else {
                VitalStatus::Normal
            }
        }
        Measurement::Glucose { value } => {
            if value > GLUCOSE_HIGH {
                VitalStatus::High
            } else if value < GLUCOSE_LOW {
                VitalStatus::Low
            } else {
                VitalStatus::Normal
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
