//! Handler for `/dashboard`: the elder-care landing page in one request.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use carenest_core::appointments::next_due;
use carenest_core::medication::is_low_stock;
use carenest_core::reminders::select_reminders;
use carenest_db::models::appointment::Appointment;
use carenest_db::repositories::{AppointmentRepo, HealthReadingRepo, MedicationRepo};

use crate::error::AppResult;
use crate::handlers::health_metrics::ReadingView;
use crate::handlers::reminders::RemindersView;
use crate::middleware::auth::AuthUser;
use crate::query::DateParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub date: NaiveDate,
    pub greeting_name: String,
    pub medication_count: usize,
    pub low_stock_count: usize,
    pub pending_appointment_count: usize,
    pub latest_reading: Option<ReadingView>,
    /// First unattended appointment dated on or before `date`.
    pub next_appointment: Option<Appointment>,
    pub reminders: RemindersView,
}

/// GET /api/dashboard?date=YYYY-MM-DD
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<DateParams>,
) -> AppResult<Json<DataResponse<DashboardView>>> {
    let today = params.today();
    let meds = MedicationRepo::list_for_user(&state.pool, auth.user_id).await?;
    let appts = AppointmentRepo::list_for_user(&state.pool, auth.user_id).await?;
    let latest_reading = HealthReadingRepo::list_recent(&state.pool, auth.user_id, 1)
        .await?
        .into_iter()
        .next()
        .map(ReadingView::new)
        .transpose()?;

    let view = DashboardView {
        date: today,
        greeting_name: auth.name.clone(),
        medication_count: meds.len(),
        low_stock_count: meds.iter().filter(|m| is_low_stock(*m)).count(),
        pending_appointment_count: appts.iter().filter(|a| !a.attended).count(),
        latest_reading,
        next_appointment: next_due(&appts, today).cloned(),
        reminders: RemindersView::new(today, select_reminders(&meds, &appts, today)),
    };

    Ok(Json(DataResponse { data: view }))
}
