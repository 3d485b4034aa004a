//! Medication stock arithmetic: refill projection, low-stock checks, and
//! input validation.
//!
//! Pure logic, no database access.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Refill threshold applied when the user does not choose one.
pub const DEFAULT_REFILL_THRESHOLD: i32 = 5;

/// Frequency label for one dose a day.
pub const FREQUENCY_DAILY: &str = "Daily";
/// Frequency label for two doses a day.
pub const FREQUENCY_TWICE_DAILY: &str = "Twice Daily";

/// Dose count assumed for any frequency label other than the two above.
const DOSES_FOR_OTHER_FREQUENCIES: i32 = 3;

const MAX_NAME_LEN: usize = 200;
const MAX_DOSES_PER_DAY: i32 = 24;

/// Stock fields the refill estimator and reminder selector read.
///
/// Implemented by [`Medication`] and by the persisted medication row so the
/// selector can work over either without copying.
pub trait StockLevel {
    fn name(&self) -> &str;
    fn stock_units(&self) -> i32;
    fn refill_threshold(&self) -> i32;
}

/// A medication snapshot as seen by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Medication {
    pub name: String,
    pub doses_per_day: i32,
    pub stock_units: i32,
    pub refill_threshold: i32,
    pub last_taken_at: Option<Timestamp>,
}

impl StockLevel for Medication {
    fn name(&self) -> &str {
        &self.name
    }

    fn stock_units(&self) -> i32 {
        self.stock_units
    }

    fn refill_threshold(&self) -> i32 {
        self.refill_threshold
    }
}

/// Projected run-out date for a medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct RefillEstimate {
    pub days_remaining: i32,
    pub refill_date: NaiveDate,
}

/// Map a frequency label from the medication form to a daily dose count.
pub fn doses_per_day_for_frequency(frequency: &str) -> i32 {
    match frequency.trim() {
        FREQUENCY_DAILY => 1,
        FREQUENCY_TWICE_DAILY => 2,
        _ => DOSES_FOR_OTHER_FREQUENCIES,
    }
}

/// Whole days the current stock lasts: `floor(stock_units / doses_per_day)`.
///
/// Precondition: `doses_per_day >= 1`. A zero or negative divisor is a
/// contract violation; it is treated as 1 rather than dividing by zero.
/// Negative stock counts as empty.
pub fn days_remaining(stock_units: i32, doses_per_day: i32) -> i32 {
    stock_units.max(0) / doses_per_day.max(1)
}

/// Project the calendar date on which stock reaches zero.
///
/// `stock_units = 0` yields `today` (refill due immediately). Same
/// precondition as [`days_remaining`].
pub fn estimate_refill_date(stock_units: i32, doses_per_day: i32, today: NaiveDate) -> NaiveDate {
    estimate_refill(stock_units, doses_per_day, today).refill_date
}

/// [`estimate_refill_date`] together with the day count it was derived from.
pub fn estimate_refill(stock_units: i32, doses_per_day: i32, today: NaiveDate) -> RefillEstimate {
    let days = days_remaining(stock_units, doses_per_day);
    let refill_date = today
        .checked_add_days(Days::new(u64::from(days.unsigned_abs())))
        .unwrap_or(NaiveDate::MAX);
    RefillEstimate {
        days_remaining: days,
        refill_date,
    }
}

/// A medication is low once stock is at or below its refill threshold.
pub fn is_low_stock<M: StockLevel + ?Sized>(medication: &M) -> bool {
    medication.stock_units() <= medication.refill_threshold()
}

/// Whether the last recorded dose fell on `today` (UTC calendar date).
pub fn taken_on(last_taken_at: Option<Timestamp>, today: NaiveDate) -> bool {
    last_taken_at.is_some_and(|t| t.date_naive() == today)
}

/// Validate the user-supplied fields of a new medication.
pub fn validate_medication(
    name: &str,
    doses_per_day: i32,
    stock_units: i32,
    refill_threshold: i32,
) -> Result<(), CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Medication name is required".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Medication name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if !(1..=MAX_DOSES_PER_DAY).contains(&doses_per_day) {
        return Err(CoreError::Validation(format!(
            "Doses per day must be between 1 and {MAX_DOSES_PER_DAY}"
        )));
    }
    if stock_units < 0 {
        return Err(CoreError::Validation("Stock cannot be negative".into()));
    }
    if refill_threshold < 0 {
        return Err(CoreError::Validation(
            "Refill threshold cannot be negative".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
