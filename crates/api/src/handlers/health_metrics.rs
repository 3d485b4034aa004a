//! Handlers for the `/health-metrics` resource (blood pressure and glucose).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use carenest_core::vitals::{classify, Measurement, VitalStatus};
use carenest_db::models::health_reading::HealthReading;
use carenest_db::repositories::HealthReadingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A stored reading with its classification.
#[derive(Debug, Serialize)]
pub struct ReadingView {
    #[serde(flatten)]
    pub reading: HealthReading,
    pub status: VitalStatus,
}

impl ReadingView {
    /// Classify a stored row. A row whose columns disagree with its kind is
    /// a storage fault, not a client error.
    pub fn new(reading: HealthReading) -> Result<Self, AppError> {
        let snapshot = reading
            .to_reading()
            .map_err(|e| AppError::InternalError(format!("Corrupt reading {}: {e}", reading.id)))?;
        Ok(Self {
            status: classify(&snapshot),
            reading,
        })
    }
}

/// GET /api/health-metrics?limit=
///
/// Most recent first; `limit` defaults to and is capped at 50.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<ReadingView>>>> {
    let rows = HealthReadingRepo::list_recent(&state.pool, auth.user_id, params.clamped()).await?;
    let data = rows
        .into_iter()
        .map(ReadingView::new)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/health-metrics
///
/// Body: `{"type":"bp","systolic":120,"diastolic":80}` or
/// `{"type":"sugar","value":95}`.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(measurement): Json<Measurement>,
) -> AppResult<(StatusCode, Json<DataResponse<ReadingView>>)> {
    measurement.validate()?;

    let row = HealthReadingRepo::create(&state.pool, auth.user_id, &measurement).await?;
    let view = ReadingView::new(row)?;

    if view.status != VitalStatus::Normal {
        tracing::info!(
            user_id = auth.user_id,
            kind = measurement.kind(),
            status = ?view.status,
            "Out-of-range reading recorded"
        );
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}
