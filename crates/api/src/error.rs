use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use carenest_core::error::CoreError;
use carenest_genai::GenAiError;
use serde_json::json;

/// SQLite extended result codes for UNIQUE and PRIMARY KEY violations.
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `carenest_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure in the generative-AI backend.
    #[error(transparent)]
    GenAi(#[from] GenAiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Generative AI ---
            AppError::GenAi(err) => classify_genai_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - SQLite UNIQUE / PRIMARY KEY violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            if matches!(
                code.as_deref(),
                Some(SQLITE_CONSTRAINT_UNIQUE | SQLITE_CONSTRAINT_PRIMARYKEY)
            ) {
                // SQLite reports "UNIQUE constraint failed: users.email".
                let target = db_err
                    .message()
                    .rsplit(": ")
                    .next()
                    .unwrap_or("unknown");
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {target}"),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

/// Classify a generative-AI failure.
///
/// - Not configured maps to 503 so the SPA can hide AI features.
/// - A malformed image is the caller's fault (400).
/// - Anything upstream maps to 502; upstream bodies are logged, not echoed.
fn classify_genai_error(err: &GenAiError) -> (StatusCode, &'static str, String) {
    match err {
        GenAiError::NotConfigured => (
            StatusCode::SERVICE_UNAVAILABLE,
            "AI_UNAVAILABLE",
            "AI features are not configured on this server".to_string(),
        ),
        GenAiError::InvalidImage(msg) => (StatusCode::BAD_REQUEST, "INVALID_IMAGE", msg.clone()),
        GenAiError::Request(_) | GenAiError::Api { .. } | GenAiError::EmptyResponse(_) => {
            tracing::error!(error = %err, "Generative AI request failed");
            (
                StatusCode::BAD_GATEWAY,
                "AI_UPSTREAM_ERROR",
                "The AI service could not complete the request".to_string(),
            )
        }
    }
}
