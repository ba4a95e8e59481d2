//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::repository::StoreError;

/// Failure kinds surfaced by the book service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub enum ErrorKind {
    ValidationError,
    NotFoundError,
    PersistenceError,
    UnexpectedError,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(StoreError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::ValidationError,
            AppError::NotFound(_) => ErrorKind::NotFoundError,
            AppError::Persistence(_) => ErrorKind::PersistenceError,
            AppError::Unexpected(_) => ErrorKind::UnexpectedError,
        }
    }

    /// HTTP status for this failure, derived from the kind alone
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::ValidationError => StatusCode::BAD_REQUEST,
            ErrorKind::NotFoundError => StatusCode::NOT_FOUND,
            ErrorKind::PersistenceError | ErrorKind::UnexpectedError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Malformed(msg) => AppError::Unexpected(msg),
            other => AppError::Persistence(other),
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// `fail` for client errors, `error` for server errors
    pub status: String,
    pub error: ErrorKind,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Persistence(e) => {
                tracing::error!("Persistence error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Unexpected(msg) => {
                tracing::error!("Unexpected error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            status: if status.is_client_error() { "fail" } else { "error" }.to_string(),
            error: self.kind(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("name required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Book x not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Persistence(StoreError::Database(sqlx::Error::PoolTimedOut)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Unexpected("bad row".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_malformed_store_error_is_unexpected() {
        let err: AppError = StoreError::Malformed("missing column".into()).into();
        assert_eq!(err.kind(), ErrorKind::UnexpectedError);

        let err: AppError = StoreError::Database(sqlx::Error::PoolClosed).into();
        assert_eq!(err.kind(), ErrorKind::PersistenceError);
    }
}
