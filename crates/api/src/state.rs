use std::sync::Arc;

use carenest_genai::GenAiProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and the
/// rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: carenest_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Skin analysis and text-to-speech backend.
    pub genai: Arc<dyn GenAiProvider>,
}
