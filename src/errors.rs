//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. The HTTP
//! conversion lives in [`crate::api::middleware::error`].

use axum::http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error with an explicitly declared HTTP status
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Startup
    #[error("Configuration error: {0}")]
    Config(String),

    // External service errors
    #[error("Database error: {0}")]
    Database(DbErr),

    // Internal
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code.
    ///
    /// Errors that do not declare a status are reported as 500.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Status { status, .. } => *status,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => AppError::NotFound,
            other => AppError::Database(other),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Status {
            status,
            message: message.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
