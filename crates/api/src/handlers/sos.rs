//! Handlers for the `/sos` resource.
//!
//! The browser captures up to [`SOS_AUDIO_CAPTURE_SECS`] of audio before
//! posting; the server only stores what it is sent. Every response echoes
//! the capture window so clients agree on its length.

use std::path::PathBuf;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use carenest_core::error::CoreError;
use carenest_core::hashing::matches_sha256;
use carenest_core::sos::{validate_coordinates, SOS_AUDIO_CAPTURE_SECS};
use carenest_core::types::DbId;
use carenest_core::uploads::{content_type_for, validate_audio_extension};
use carenest_db::models::sos_event::{CreateSosEvent, SosEvent};
use carenest_db::repositories::SosEventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::{read_upload, remove_upload, save_upload};

/// Request body for `POST /sos`.
#[derive(Debug, Deserialize)]
pub struct TriggerSosRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct SosView {
    #[serde(flatten)]
    pub event: SosEvent,
    pub has_audio: bool,
    pub capture_window_secs: u32,
}

impl From<SosEvent> for SosView {
    fn from(event: SosEvent) -> Self {
        Self {
            has_audio: event.has_audio(),
            capture_window_secs: SOS_AUDIO_CAPTURE_SECS,
            event,
        }
    }
}

async fn record(
    state: &AppState,
    auth: &AuthUser,
    input: CreateSosEvent,
) -> AppResult<(StatusCode, Json<DataResponse<SosView>>)> {
    let event = SosEventRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::warn!(
        user_id = auth.user_id,
        sos_id = event.id,
        latitude = event.latitude,
        longitude = event.longitude,
        has_audio = event.has_audio(),
        "SOS triggered"
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SosView::from(event),
        }),
    ))
}

/// POST /api/sos
pub async fn trigger(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<TriggerSosRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SosView>>)> {
    validate_coordinates(input.latitude, input.longitude)?;
    record(
        &state,
        &auth,
        CreateSosEvent {
            latitude: input.latitude,
            longitude: input.longitude,
            audio_path: None,
            audio_sha256: None,
        },
    )
    .await
}

/// POST /api/sos/audio
///
/// Multipart form: `latitude`, `longitude`, optional `audio` file.
pub async fn trigger_with_audio(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<SosView>>)> {
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;
    let mut audio: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "audio" => {
                let filename = field.file_name().unwrap_or("sos.webm").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !data.is_empty() {
                    audio = Some((filename, data.to_vec()));
                }
            }
            "latitude" | "longitude" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let value: f64 = text
                    .trim()
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("'{name}' must be a number")))?;
                if name == "latitude" {
                    latitude = Some(value);
                } else {
                    longitude = Some(value);
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    let latitude =
        latitude.ok_or_else(|| AppError::BadRequest("Missing required 'latitude' field".into()))?;
    let longitude = longitude
        .ok_or_else(|| AppError::BadRequest("Missing required 'longitude' field".into()))?;
    validate_coordinates(latitude, longitude)?;

    let stored = match &audio {
        Some((filename, data)) => {
            validate_audio_extension(filename)?;
            Some(save_upload(&state.config.upload_dir, filename, data).await?)
        }
        None => None,
    };

    let input = CreateSosEvent {
        latitude,
        longitude,
        audio_path: stored.as_ref().map(|s| s.path.to_string_lossy().to_string()),
        audio_sha256: stored.as_ref().map(|s| s.sha256.clone()),
    };

    match record(&state, &auth, input).await {
        Ok(created) => Ok(created),
        Err(e) => {
            if let Some(stored) = &stored {
                remove_upload(&stored.path).await.ok();
            }
            Err(e)
        }
    }
}

/// GET /api/sos?limit=
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<SosView>>>> {
    let events = SosEventRepo::list_for_user(&state.pool, auth.user_id, params.clamped()).await?;
    Ok(Json(DataResponse {
        data: events.into_iter().map(SosView::from).collect(),
    }))
}

/// GET /api/sos/{id}/audio
///
/// Streams back the clip attached to one of the caller's SOS events. Events
/// without a clip answer 404, as does a clip whose file has gone.
pub async fn audio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "SOS audio",
            id,
        })
    };

    let event = SosEventRepo::find_for_user(&state.pool, auth.user_id, id)
        .await?
        .ok_or_else(not_found)?;
    let path = event.audio_path.as_deref().ok_or_else(not_found)?;

    let bytes = read_upload(&PathBuf::from(path)).await?.ok_or_else(|| {
        tracing::warn!(sos_id = id, path, "SOS clip missing on disk");
        not_found()
    })?;

    let digest = event.audio_sha256.as_deref().unwrap_or_default();
    if !matches_sha256(&bytes, digest) {
        return Err(AppError::InternalError(format!(
            "SOS clip {id} failed its integrity check"
        )));
    }

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type_for(path))],
        bytes,
    ))
}
