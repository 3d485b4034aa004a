pub mod appointments;
pub mod assistant;
pub mod auth;
pub mod dashboard;
pub mod health_metrics;
pub mod medications;
pub mod reminders;
pub mod reports;
pub mod skin;
pub mod sos;
pub mod women;
