//! Handlers for the `/reports` resource (uploaded medical documents).

use std::path::PathBuf;

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use carenest_core::error::CoreError;
use carenest_core::hashing::matches_sha256;
use carenest_core::types::DbId;
use carenest_core::uploads::{
    content_type_for, download_file_name, validate_report_extension, validate_report_kind,
};
use carenest_db::models::report::{CreateReport, Report};
use carenest_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::{read_upload, remove_upload, save_upload};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Report",
        id,
    })
}

/// GET /api/reports
///
/// Newest first.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Report>>>> {
    let data = ReportRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/reports
///
/// Multipart form: `report` (file, required), `name` (display name,
/// defaults to the file name), `type` (`pdf` or `image`).
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Report>>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut name: Option<String> = None;
    let mut kind: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "report" => {
                let filename = field.file_name().unwrap_or("report").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            "name" | "type" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let text = text.trim().to_string();
                if field_name == "name" {
                    name = Some(text);
                } else {
                    kind = Some(text);
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) = file_data
        .ok_or_else(|| AppError::BadRequest("Missing required 'report' file field".into()))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let kind = kind.ok_or_else(|| AppError::BadRequest("Missing required 'type' field".into()))?;
    validate_report_kind(&kind)?;
    validate_report_extension(&kind, &filename)?;

    let name = name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| filename.clone());

    let stored = save_upload(&state.config.upload_dir, &filename, &data).await?;
    let input = CreateReport {
        name,
        kind,
        file_path: stored.path.to_string_lossy().to_string(),
        file_size: stored.size,
        sha256: stored.sha256,
    };

    let report = match ReportRepo::create(&state.pool, auth.user_id, &input).await {
        Ok(report) => report,
        Err(e) => {
            // Do not leave an orphaned file behind.
            remove_upload(&stored.path).await.ok();
            return Err(e.into());
        }
    };

    tracing::info!(user_id = auth.user_id, report_id = report.id, bytes = report.file_size, "Report uploaded");
    Ok((StatusCode::CREATED, Json(DataResponse { data: report })))
}

/// GET /api/reports/{id}/download
///
/// Sends the stored bytes back with the display name as the download
/// file name. Bytes that no longer match the recorded digest are refused.
pub async fn download(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let report = ReportRepo::find_for_user(&state.pool, auth.user_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let bytes = read_upload(&PathBuf::from(&report.file_path))
        .await?
        .ok_or_else(|| {
            tracing::warn!(report_id = id, path = %report.file_path, "Report file missing on disk");
            not_found(id)
        })?;

    if !matches_sha256(&bytes, &report.sha256) {
        return Err(AppError::InternalError(format!(
            "Report {id} failed its integrity check"
        )));
    }

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download_file_name(&report.name, &report.file_path)
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type_for(&report.file_path).to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// DELETE /api/reports/{id}
///
/// Removes the file (tolerating one already gone), then the row.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let report = ReportRepo::find_for_user(&state.pool, auth.user_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    remove_upload(&PathBuf::from(&report.file_path)).await?;
    ReportRepo::delete(&state.pool, auth.user_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(StatusCode::NO_CONTENT)
}
