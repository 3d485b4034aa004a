use std::net::SocketAddr;
use std::sync::Arc;

use carenest_db::DbPool;
use carenest_genai::{DisabledProvider, GeminiClient, GeminiConfig, GenAiProvider};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use carenest_api::config::ServerConfig;
use carenest_api::router::build_app_router;
use carenest_api::state::AppState;

const DEFAULT_LOG_FILTER: &str = "carenest_api=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        upload_dir = %config.upload_dir.display(),
        max_upload_bytes = config.max_upload_bytes,
        "Configuration loaded"
    );

    let pool = connect_database().await;
    let genai = select_genai_provider();

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let app = build_app_router(
        AppState {
            pool,
            config: Arc::new(config.clone()),
            genai,
        },
        &config,
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "CareNest API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}

/// `RUST_LOG` wins; otherwise debug for this crate and the HTTP layers.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open the pool from `DATABASE_URL`, verify it, and apply migrations.
async fn connect_database() -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = carenest_db::create_pool(&url)
        .await
        .expect("Failed to open database");
    carenest_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    carenest_db::run_migrations(&pool)
        .await
        .expect("Failed to apply migrations");

    tracing::info!("Database ready");
    pool
}

/// Gemini when `GEMINI_API_KEY` is set, otherwise a provider that makes
/// every AI endpoint answer 503.
fn select_genai_provider() -> Arc<dyn GenAiProvider> {
    let Some(gemini) = GeminiConfig::from_env() else {
        tracing::warn!("GEMINI_API_KEY not set; skin analysis and speech are disabled");
        return Arc::new(DisabledProvider);
    };

    tracing::info!(
        vision_model = %gemini.vision_model,
        tts_model = %gemini.tts_model,
        voice = %gemini.voice,
        "Gemini provider enabled"
    );
    Arc::new(GeminiClient::new(gemini).expect("Failed to build Gemini HTTP client"))
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, draining connections"),
        () = terminate => tracing::info!("SIGTERM received, draining connections"),
    }
}
