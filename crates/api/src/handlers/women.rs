//! Handlers for the women's-care calculators (`/women/...`).

use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use carenest_core::cycle::{
    predict_next_period, CycleForecast, DEFAULT_CYCLE_LENGTH_DAYS, DEFAULT_PERIOD_LENGTH_DAYS,
};
use carenest_core::pcos::{assess, PcosAnswers, PcosRisk};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

#[derive(Debug, Deserialize)]
pub struct CyclePredictRequest {
    pub last_period_start: NaiveDate,
    pub cycle_length_days: Option<u32>,
    pub period_length_days: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PcosAssessment {
    pub risk: PcosRisk,
    pub symptom_count: u8,
}

/// POST /api/women/cycle/predict
pub async fn predict_cycle(
    _auth: AuthUser,
    Json(input): Json<CyclePredictRequest>,
) -> AppResult<Json<DataResponse<CycleForecast>>> {
    let forecast = predict_next_period(
        input.last_period_start,
        input.cycle_length_days.unwrap_or(DEFAULT_CYCLE_LENGTH_DAYS),
        input.period_length_days.unwrap_or(DEFAULT_PERIOD_LENGTH_DAYS),
    )?;
    Ok(Json(DataResponse { data: forecast }))
}

/// POST /api/women/pcos/assess
pub async fn assess_pcos(
    _auth: AuthUser,
    Json(answers): Json<PcosAnswers>,
) -> AppResult<Json<DataResponse<PcosAssessment>>> {
    Ok(Json(DataResponse {
        data: PcosAssessment {
            risk: assess(&answers),
            symptom_count: answers.symptom_count(),
        },
    }))
}
