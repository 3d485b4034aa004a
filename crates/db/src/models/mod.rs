//! Row models and DTOs, one module per table.

pub mod appointment;
pub mod health_reading;
pub mod medication;
pub mod report;
pub mod sos_event;
pub mod user;
