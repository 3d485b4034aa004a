//! Handler for `/skin/analyze`.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use carenest_core::skin::SkinAnswers;
use carenest_genai::image::InlineImage;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeSkinRequest {
    /// Data URL (`data:image/jpeg;base64,...`) or bare base64.
    pub image: String,
    pub answers: SkinAnswers,
}

#[derive(Debug, Serialize)]
pub struct SkinAnalysis {
    pub analysis: String,
}

/// POST /api/skin/analyze
pub async fn analyze(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<AnalyzeSkinRequest>,
) -> AppResult<Json<DataResponse<SkinAnalysis>>> {
    input.answers.validate()?;
    let image = InlineImage::parse(&input.image)?;

    tracing::info!(user_id = auth.user_id, mime = %image.mime_type, "Skin analysis requested");
    let analysis = state.genai.analyze_skin(&image, &input.answers).await?;

    Ok(Json(DataResponse {
        data: SkinAnalysis { analysis },
    }))
}
