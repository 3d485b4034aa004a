//! Menstrual cycle forecast for the women's-care tracker.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreError;

pub const DEFAULT_CYCLE_LENGTH_DAYS: u32 = 28;
pub const DEFAULT_PERIOD_LENGTH_DAYS: u32 = 5;

const CYCLE_LENGTH_RANGE: std::ops::RangeInclusive<u32> = 20..=45;
const PERIOD_LENGTH_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Predicted next period window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CycleForecast {
    pub next_period_start: NaiveDate,
    /// Last expected day of bleeding, inclusive.
    pub next_period_end: NaiveDate,
}

/// Forecast the next period from the last start date and average lengths.
///
/// The next start is `last_period_start + cycle_length_days`.
pub fn predict_next_period(
    last_period_start: NaiveDate,
    cycle_length_days: u32,
    period_length_days: u32,
) -> Result<CycleForecast, CoreError> {
    if !CYCLE_LENGTH_RANGE.contains(&cycle_length_days) {
        return Err(CoreError::Validation(format!(
            "Cycle length must be between {} and {} days",
            CYCLE_LENGTH_RANGE.start(),
            CYCLE_LENGTH_RANGE.end()
        )));
    }
    if !PERIOD_LENGTH_RANGE.contains(&period_length_days) {
        return Err(CoreError::Validation(format!(
            "Period length must be between {} and {} days",
            PERIOD_LENGTH_RANGE.start(),
            PERIOD_LENGTH_RANGE.end()
        )));
    }

    let out_of_range = || CoreError::Validation("Date is out of range".into());
    let next_period_start = last_period_start
        .checked_add_days(Days::new(u64::from(cycle_length_days)))
        .ok_or_else(out_of_range)?;
    let next_period_end = next_period_start
        .checked_add_days(Days::new(u64::from(period_length_days - 1)))
        .ok_or_else(out_of_range)?;

    Ok(CycleForecast {
        next_period_start,
        next_period_end,
    })
}
