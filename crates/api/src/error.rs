use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inventory_core::error::CoreError;

use crate::response::FailResponse;

/// Message placed in every failure envelope.
pub const FAIL_MESSAGE: &str = "Data inserted failed";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{status: "fail", ...}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inventory_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
                CoreError::DuplicateKey { .. } => (StatusCode::BAD_REQUEST, core.to_string()),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = FailResponse {
            status: "fail",
            message: FAIL_MESSAGE,
            error,
        };

        (status, axum::Json(body)).into_response()
    }
}

/// PostgreSQL SQLSTATE for a CHECK constraint violation.
const CHECK_VIOLATION: &str = "23514";

/// PostgreSQL SQLSTATE class for data exceptions (bad encoding, overflow).
const DATA_EXCEPTION_CLASS: &str = "22";

/// Classify a sqlx error into an HTTP status and message.
///
/// - Unique violations map to 400 (the product name is taken).
/// - CHECK violations map to 400 (the row broke a product rule).
/// - Data exceptions map to 400 (a supplied value could not be stored).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    if let Some(constraint) = inventory_db::unique_violation(err) {
        return (
            StatusCode::BAD_REQUEST,
            format!("Duplicate value violates unique constraint: {constraint}"),
        );
    }
    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some(CHECK_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return (
                StatusCode::BAD_REQUEST,
                format!("Value violates check constraint: {constraint}"),
            );
        }
        if let Some(code) = db_err.code() {
            if code.starts_with(DATA_EXCEPTION_CLASS) {
                tracing::debug!(code = %code, error = %db_err, "Rejected value");
                return (StatusCode::BAD_REQUEST, "Value could not be stored".to_string());
            }
        }
    }
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}
