use axum::routing::get;
use axum::Router;

use crate::handlers::health_metrics;
use crate::state::AppState;

/// Routes mounted at `/health-metrics`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_metrics::list).post(health_metrics::create))
}
