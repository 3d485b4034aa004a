//! Handlers for the `/medications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use carenest_core::error::CoreError;
use carenest_core::medication::{
    doses_per_day_for_frequency, estimate_refill, is_low_stock, taken_on, validate_medication,
    RefillEstimate, DEFAULT_REFILL_THRESHOLD, FREQUENCY_DAILY,
};
use carenest_core::types::DbId;
use carenest_db::models::medication::{CreateMedication, Medication, TakeDoseOutcome};
use carenest_db::repositories::MedicationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::DateParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /medications`.
#[derive(Debug, Deserialize)]
pub struct CreateMedicationRequest {
    pub name: String,
    pub dosage: Option<String>,
    /// Form label; defaults to `"Daily"`.
    pub frequency: Option<String>,
    /// Overrides the count implied by `frequency`.
    pub doses_per_day: Option<i32>,
    #[serde(alias = "time")]
    pub time_of_day: Option<String>,
    pub stock: i32,
    pub refill_threshold: Option<i32>,
}

/// A medication row with its derived stock figures for `date`.
#[derive(Debug, Serialize)]
pub struct MedicationView {
    #[serde(flatten)]
    pub medication: Medication,
    pub days_remaining: i32,
    pub refill_date: NaiveDate,
    pub is_low_stock: bool,
    pub taken_today: bool,
}

impl MedicationView {
    pub fn new(medication: Medication, today: NaiveDate) -> Self {
        let RefillEstimate {
            days_remaining,
            refill_date,
        } = estimate_refill(medication.stock, medication.doses_per_day, today);
        Self {
            days_remaining,
            refill_date,
            is_low_stock: is_low_stock(&medication),
            taken_today: taken_on(medication.last_taken_at, today),
            medication,
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Medication",
        id,
    })
}

/// GET /api/medications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<DateParams>,
) -> AppResult<Json<DataResponse<Vec<MedicationView>>>> {
    let today = params.today();
    let meds = MedicationRepo::list_for_user(&state.pool, auth.user_id).await?;
    let data = meds
        .into_iter()
        .map(|m| MedicationView::new(m, today))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/medications?date=YYYY-MM-DD
///
/// `date` sets the day the derived figures are computed for, as in `list`.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<DateParams>,
    Json(input): Json<CreateMedicationRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<MedicationView>>)> {
    let frequency = input
        .frequency
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| FREQUENCY_DAILY.to_string());
    let doses_per_day = input
        .doses_per_day
        .unwrap_or_else(|| doses_per_day_for_frequency(&frequency));
    let refill_threshold = input.refill_threshold.unwrap_or(DEFAULT_REFILL_THRESHOLD);

    validate_medication(&input.name, doses_per_day, input.stock, refill_threshold)?;

    let med = MedicationRepo::create(
        &state.pool,
        auth.user_id,
        &CreateMedication {
            name: input.name.trim().to_string(),
            dosage: input.dosage.filter(|d| !d.trim().is_empty()),
            frequency,
            doses_per_day,
            time_of_day: input.time_of_day.filter(|t| !t.trim().is_empty()),
            stock: input.stock,
            refill_threshold,
        },
    )
    .await?;

    tracing::info!(user_id = auth.user_id, medication_id = med.id, "Medication added");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: MedicationView::new(med, params.today()),
        }),
    ))
}

/// POST /api/medications/{id}/take?date=YYYY-MM-DD
///
/// Records one dose. 400 when the stock is already empty.
pub async fn take(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<DateParams>,
) -> AppResult<Json<DataResponse<MedicationView>>> {
    match MedicationRepo::take_dose(&state.pool, auth.user_id, id).await? {
        TakeDoseOutcome::Taken(med) => Ok(Json(DataResponse {
            data: MedicationView::new(med, params.today()),
        })),
        TakeDoseOutcome::OutOfStock => Err(AppError::Core(CoreError::Validation(
            "This medication is out of stock. Please refill before taking a dose.".into(),
        ))),
        TakeDoseOutcome::NotFound => Err(not_found(id)),
    }
}

/// GET /api/medications/{id}/refill?date=YYYY-MM-DD
pub async fn refill_estimate(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<DateParams>,
) -> AppResult<Json<DataResponse<RefillEstimate>>> {
    let med = MedicationRepo::find_for_user(&state.pool, auth.user_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: estimate_refill(med.stock, med.doses_per_day, params.today()),
    }))
}

/// DELETE /api/medications/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MedicationRepo::delete(&state.pool, auth.user_id, id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
