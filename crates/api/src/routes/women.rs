use axum::routing::post;
use axum::Router;

use crate::handlers::women;
use crate::state::AppState;

/// Routes mounted at `/women`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cycle/predict", post(women::predict_cycle))
        .route("/pcos/assess", post(women::assess_pcos))
}
