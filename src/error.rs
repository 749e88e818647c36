//! Error types for the taskboard service.
//!
//! Two user-facing error kinds exist: validation failures (400) and missing
//! tasks (404). Everything else is an internal error, logged server-side and
//! returned with a non-specific message.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for store operations.
#[derive(Error, Debug)]
pub enum TaskBoardError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    /// Connection pool errors
    #[error("Connection pool error: {0}")]
    Pool(String),
}

/// Error type for API operations (converts to HTTP responses).
///
/// The response body is always `{"error": "<message>"}`, the single error
/// contract shared with the client view.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    /// The 404 returned whenever a referenced task id does not exist.
    pub fn task_not_found() -> Self {
        ApiError::NotFound("task not found".to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}

impl From<TaskBoardError> for ApiError {
    fn from(err: TaskBoardError) -> Self {
        match err {
            TaskBoardError::Database(e) => {
                log::error!("Database error: {}", e);
                ApiError::InternalServerError("internal server error".to_string())
            }
            TaskBoardError::Pool(e) => {
                log::error!("Pool error: {}", e);
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        ApiError::BadRequest(message)
    }
}
