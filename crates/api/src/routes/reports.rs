use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> upload (multipart)
/// DELETE /{id}            -> delete
/// GET    /{id}/download   -> download
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reports::list).post(reports::upload))
        .route("/{id}", delete(reports::delete))
        .route("/{id}/download", get(reports::download))
}
