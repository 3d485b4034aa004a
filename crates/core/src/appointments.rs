//! Appointment scheduling helpers.
//!
//! `scheduled_at` is the wall-clock time the user typed into the form, kept
//! without a timezone; date comparisons are plain calendar comparisons.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::CoreError;

const MAX_TITLE_LEN: usize = 200;

/// Schedule fields the reminder selector reads.
pub trait Scheduled {
    fn title(&self) -> &str;
    fn scheduled_at(&self) -> NaiveDateTime;
    fn attended(&self) -> bool;
}

/// An appointment snapshot as seen by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub title: String,
    pub scheduled_at: NaiveDateTime,
    pub attended: bool,
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

/// True when the appointment is still pending and falls on `day`.
pub fn is_pending_on<A: Scheduled + ?Sized>(appointment: &A, day: NaiveDate) -> bool {
    !appointment.attended() && appointment.scheduled_at().date() == day
}

/// First unattended appointment dated on or before `today`, in input order.
///
/// This is the dashboard banner: overdue visits that were never marked
/// attended stay on it until they are.
pub fn next_due<A: Scheduled>(appointments: &[A], today: NaiveDate) -> Option<&A> {
    appointments
        .iter()
        .find(|a| !a.attended() && a.scheduled_at().date() <= today)
}

/// Accepted wall-clock layouts, most specific first. The first is what an
/// HTML `datetime-local` input submits.
const SCHEDULE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse the appointment time as typed.
///
/// An RFC 3339 value with an offset keeps its local wall-clock part; the
/// offset is dropped because the reminder compares calendar dates only.
pub fn parse_scheduled_at(input: &str) -> Result<NaiveDateTime, CoreError> {
    let input = input.trim();
    if let Some(parsed) = SCHEDULE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Ok(parsed);
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.naive_local())
        .map_err(|_| {
            CoreError::Validation(format!(
                "Invalid appointment time '{input}'. Expected YYYY-MM-DDTHH:MM"
            ))
        })
}

/// Validate the user-supplied title of a new appointment.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("Appointment title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Appointment title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}
