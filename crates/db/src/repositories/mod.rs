//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Every query on a per-user
//! table is scoped by `user_id`; a row owned by someone else is reported
//! exactly like a missing one.

pub mod appointment_repo;
pub mod health_reading_repo;
pub mod medication_repo;
pub mod report_repo;
pub mod sos_event_repo;
pub mod user_repo;

pub use appointment_repo::AppointmentRepo;
pub use health_reading_repo::HealthReadingRepo;
pub use medication_repo::MedicationRepo;
pub use report_repo::ReportRepo;
pub use sos_event_repo::SosEventRepo;
pub use user_repo::UserRepo;
