use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reminders;
use crate::state::AppState;

/// Routes mounted at `/reminders`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reminders::today))
        .route("/speak", post(reminders::speak))
}
