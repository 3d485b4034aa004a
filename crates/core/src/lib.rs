//! Domain logic for CareNest.
//!
//! Everything here is pure: no database, HTTP, or filesystem access. The
//! evaluator core lives in [`vitals`], [`medication`], and [`reminders`];
//! the remaining modules hold validation rules and small calculators used by
//! the API layer.

pub mod account;
pub mod appointments;
pub mod cycle;
pub mod error;
pub mod hashing;
pub mod medication;
pub mod pcos;
pub mod reminders;
pub mod roles;
pub mod skin;
pub mod sos;
pub mod types;
pub mod uploads;
pub mod vitals;
