use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::appointments;
use crate::state::AppState;

/// Routes mounted at `/appointments`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// DELETE /{id}          -> delete
/// POST   /{id}/attend   -> attend
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(appointments::list).post(appointments::create))
        .route("/{id}", delete(appointments::delete))
        .route("/{id}/attend", post(appointments::attend))
}
