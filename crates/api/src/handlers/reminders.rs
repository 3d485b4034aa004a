//! Handlers for `/reminders`: today's appointment and low-stock nudges.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use carenest_core::reminders::{select_reminders, Reminders};
use carenest_db::models::appointment::Appointment;
use carenest_db::models::medication::Medication;
use carenest_db::repositories::{AppointmentRepo, MedicationRepo};
use carenest_genai::SpeechClip;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::DateParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// The selected reminders for one day plus their spoken phrasing.
#[derive(Debug, Serialize)]
pub struct RemindersView {
    pub date: NaiveDate,
    pub appointment: Option<Appointment>,
    pub low_stock: Option<Medication>,
    pub messages: Vec<String>,
}

impl RemindersView {
    pub fn new(date: NaiveDate, selected: Reminders<'_, Medication, Appointment>) -> Self {
        Self {
            date,
            messages: selected.spoken_messages(),
            appointment: selected.appointment.cloned(),
            low_stock: selected.low_stock.cloned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpokenReminder {
    pub message: String,
    #[serde(flatten)]
    pub clip: SpeechClip,
}

#[derive(Debug, Serialize)]
pub struct SpokenReminders {
    pub date: NaiveDate,
    pub clips: Vec<SpokenReminder>,
}

/// Load the user's lists in the order the selector breaks ties by:
/// medications by insertion, appointments by schedule.
pub async fn load_reminders(
    state: &AppState,
    auth: &AuthUser,
    date: NaiveDate,
) -> AppResult<RemindersView> {
    let meds = MedicationRepo::list_for_user(&state.pool, auth.user_id).await?;
    let appts = AppointmentRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(RemindersView::new(date, select_reminders(&meds, &appts, date)))
}

/// GET /api/reminders?date=YYYY-MM-DD
pub async fn today(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<DateParams>,
) -> AppResult<Json<DataResponse<RemindersView>>> {
    let view = load_reminders(&state, &auth, params.today()).await?;
    Ok(Json(DataResponse { data: view }))
}

/// POST /api/reminders/speak?date=YYYY-MM-DD
///
/// Synthesises each selected message, appointment first. No reminders
/// means no AI call and an empty clip list.
pub async fn speak(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<DateParams>,
) -> AppResult<Json<DataResponse<SpokenReminders>>> {
    let view = load_reminders(&state, &auth, params.today()).await?;

    let mut clips = Vec::with_capacity(view.messages.len());
    for message in view.messages {
        let clip = state.genai.synthesize_speech(&message).await?;
        clips.push(SpokenReminder { message, clip });
    }

    Ok(Json(DataResponse {
        data: SpokenReminders {
            date: view.date,
            clips,
        },
    }))
}
