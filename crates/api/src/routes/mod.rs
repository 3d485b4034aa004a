pub mod appointments;
pub mod assistant;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod health_metrics;
pub mod medications;
pub mod reminders;
pub mod reports;
pub mod sos;
pub mod women;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/me                             current user
///
/// /medications                         list, create
/// /medications/{id}                    delete
/// /medications/{id}/take               record a dose (POST)
/// /medications/{id}/refill             refill estimate (GET)
///
/// /health-metrics                      list recent, record reading
///
/// /appointments                        list, create
/// /appointments/{id}                   delete
/// /appointments/{id}/attend            mark attended (POST)
///
/// /reports                             list, upload (multipart)
/// /reports/{id}                        delete
/// /reports/{id}/download               file bytes (GET)
///
/// /sos                                 history, trigger
/// /sos/audio                           trigger with audio clip (multipart)
/// /sos/{id}/audio                      play back a stored clip
///
/// /reminders                           today's reminders (GET)
/// /reminders/speak                     today's reminders as speech (POST)
/// /dashboard                           elder-care summary (GET)
///
/// /assistant/speak                     text to speech (POST)
/// /skin/analyze                        skin photo analysis (POST)
///
/// /women/cycle/predict                 next period forecast (POST)
/// /women/pcos/assess                   PCOS symptom screening (POST)
/// ```
///
/// Everything except register and login requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/medications", medications::router())
        .nest("/health-metrics", health_metrics::router())
        .nest("/appointments", appointments::router())
        .nest("/reports", reports::router())
        .nest("/sos", sos::router())
        .nest("/reminders", reminders::router())
        .nest("/dashboard", dashboard::router())
        .nest("/assistant", assistant::router())
        .nest("/skin", assistant::skin_router())
        .nest("/women", women::router())
}
