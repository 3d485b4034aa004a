//! Daily reminder selection.
//!
//! Picks at most one appointment and one low-stock medication to surface
//! for a given day. Delivery (speech, banner) is the caller's business; this
//! module only chooses and phrases.

use chrono::NaiveDate;
use serde::Serialize;

use crate::appointments::{is_pending_on, Scheduled};
use crate::medication::{is_low_stock, StockLevel};

/// The reminders chosen for one day. Either side may be absent.
#[derive(Debug, Serialize)]
pub struct Reminders<'a, M, A> {
    pub appointment: Option<&'a A>,
    pub low_stock: Option<&'a M>,
}

impl<M, A> Clone for Reminders<'_, M, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, A> Copy for Reminders<'_, M, A> {}

impl<M: StockLevel, A: Scheduled> Reminders<'_, M, A> {
    /// True when neither reminder applies.
    pub fn is_empty(&self) -> bool {
        self.appointment.is_none() && self.low_stock.is_none()
    }

    /// Phrase the selected reminders for text-to-speech, appointment first.
    pub fn spoken_messages(&self) -> Vec<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(appt) = self.appointment {
            messages.push(appointment_message(appt));
        }
        if let Some(med) = self.low_stock {
            messages.push(low_stock_message(med));
        }
        messages
    }
}

/// Select today's reminders.
///
/// - appointment: the first unattended appointment dated `today`;
/// - low stock: the first medication with `stock_units <= refill_threshold`.
///
/// "First" is input order, so callers pass lists in the order they want
/// ties broken (schedule order for appointments, insertion order for
/// medications).
pub fn select_reminders<'a, M: StockLevel, A: Scheduled>(
    medications: &'a [M],
    appointments: &'a [A],
    today: NaiveDate,
) -> Reminders<'a, M, A> {
    Reminders {
        appointment: appointments.iter().find(|a| is_pending_on(*a, today)),
        low_stock: medications.iter().find(|m| is_low_stock(*m)),
    }
}

/// "You have an appointment today: {title} at {HH:MM}".
pub fn appointment_message<A: Scheduled + ?Sized>(appointment: &A) -> String {
    format!(
        "You have an appointment today: {} at {}",
        appointment.title(),
        appointment.scheduled_at().format("%H:%M")
    )
}

/// "Reminder: Your medicine {name} is running low. Please refill soon."
pub fn low_stock_message<M: StockLevel + ?Sized>(medication: &M) -> String {
    format!(
        "Reminder: Your medicine {} is running low. Please refill soon.",
        medication.name()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
