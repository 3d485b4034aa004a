//! Routes backed by the generative-AI provider.

use axum::routing::post;
use axum::Router;

use crate::handlers::{assistant, skin};
use crate::state::AppState;

/// Routes mounted at `/assistant`.
pub fn router() -> Router<AppState> {
    Router::new().route("/speak", post(assistant::speak))
}

/// Routes mounted at `/skin`.
pub fn skin_router() -> Router<AppState> {
    Router::new().route("/analyze", post(skin::analyze))
}
