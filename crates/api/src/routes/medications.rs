use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::medications;
use crate::state::AppState;

/// Routes mounted at `/medications`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// DELETE /{id}          -> delete
/// POST   /{id}/take     -> take
/// GET    /{id}/refill   -> refill_estimate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(medications::list).post(medications::create))
        .route("/{id}", delete(medications::delete))
        .route("/{id}/take", post(medications::take))
        .route("/{id}/refill", get(medications::refill_estimate))
}
