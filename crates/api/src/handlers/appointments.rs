//! Handlers for the `/appointments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use carenest_core::appointments::{parse_scheduled_at, validate_title};
use carenest_core::error::CoreError;
use carenest_core::types::DbId;
use carenest_db::models::appointment::{Appointment, CreateAppointment};
use carenest_db::repositories::AppointmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /appointments`.
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub title: String,
    pub doctor: Option<String>,
    /// Wall-clock time, e.g. `2024-05-10T11:00`.
    #[serde(alias = "date")]
    pub scheduled_at: String,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Appointment",
        id,
    })
}

/// GET /api/appointments
///
/// Earliest first.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Appointment>>>> {
    let data = AppointmentRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/appointments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateAppointmentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Appointment>>)> {
    validate_title(&input.title)?;
    let scheduled_at = parse_scheduled_at(&input.scheduled_at)?;

    let appt = AppointmentRepo::create(
        &state.pool,
        auth.user_id,
        &CreateAppointment {
            title: input.title.trim().to_string(),
            doctor: input.doctor.filter(|d| !d.trim().is_empty()),
            scheduled_at,
        },
    )
    .await?;

    tracing::info!(user_id = auth.user_id, appointment_id = appt.id, "Appointment scheduled");
    Ok((StatusCode::CREATED, Json(DataResponse { data: appt })))
}

/// POST /api/appointments/{id}/attend
pub async fn attend(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Appointment>>> {
    let appt = AppointmentRepo::mark_attended(&state.pool, auth.user_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: appt }))
}

/// DELETE /api/appointments/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AppointmentRepo::delete(&state.pool, auth.user_id, id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
