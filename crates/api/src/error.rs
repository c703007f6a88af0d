use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shelf_core::error::CoreError;

/// Status every catalog route failure answers with. The `code` field in the
/// body tells the failure kinds apart.
pub const ERROR_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

const SANITIZED_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `shelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request that could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Machine-readable error code and client-facing message.
    ///
    /// Internal and store failures are logged here and their message replaced.
    fn code_and_message(&self) -> (&'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                ("NOT_FOUND", format!("{entity} with id {id} not found"))
            }
            AppError::Core(CoreError::Validation(msg)) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                ("INTERNAL_ERROR", SANITIZED_MESSAGE.to_string())
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => ("BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ("INTERNAL_ERROR", SANITIZED_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = self.code_and_message();
        let body = json!({
            "error": message,
            "code": code,
        });
        (ERROR_STATUS, axum::Json(body)).into_response()
    }
}

/// `RowNotFound` becomes `NOT_FOUND`; everything else is logged and
/// sanitized.
fn classify_sqlx_error(err: &sqlx::Error) -> (&'static str, String) {
    match err {
        sqlx::Error::RowNotFound => ("NOT_FOUND", "Resource not found".to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            ("INTERNAL_ERROR", SANITIZED_MESSAGE.to_string())
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
