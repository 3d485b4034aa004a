use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sos;
use crate::state::AppState;

/// Routes mounted at `/sos`.
///
/// ```text
/// GET  /           -> list
/// POST /           -> trigger
/// POST /audio      -> trigger_with_audio (multipart)
/// GET  /{id}/audio -> audio
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sos::list).post(sos::trigger))
        .route("/audio", post(sos::trigger_with_audio))
        .route("/{id}/audio", get(sos::audio))
}
