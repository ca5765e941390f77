//! # App Error Type
//!
//! Unified error type for controller actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Controller action (Add / Edit / Delete / Refresh)                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Validation failed? ── CoreError::Validation ──┐                       │
//! │  Nothing selected?  ── CoreError::NoSelection ─┤                       │
//! │  Store failed?      ── DbError::* ─────────────┼──► AppError           │
//! │                                                │        │              │
//! │                                                         ▼              │
//! │                                     tracing::error! (store failures)   │
//! │                                     error dialog (always)              │
//! │                                                                         │
//! │  The window stays open in every case.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use stockroom_core::CoreError;
use stockroom_db::DbError;
use thiserror::Error;

/// Error shown to the user in the error dialog.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code, used to pick the handling path
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input rejected; the form stays open
    ValidationError,

    /// Edit or delete with no row selected
    SelectionError,

    /// Selected row vanished from the store
    NotFound,

    /// Store operation failed
    DatabaseError,

    /// Startup or environment problem
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        AppError::new(
            ErrorCode::NotFound,
            format!("{} {} no longer exists.", resource, id),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }

    /// Title for the error dialog.
    pub fn title(&self) -> &'static str {
        match self.code {
            ErrorCode::ValidationError | ErrorCode::SelectionError | ErrorCode::NotFound => "Error",
            ErrorCode::DatabaseError => "Database Error",
            ErrorCode::Internal => "Internal Error",
        }
    }
}

/// Converts database errors to app errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database initialization failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database initialization failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                AppError::new(
                    ErrorCode::DatabaseError,
                    format!("Database operation failed: {}", e),
                )
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match err {
            CoreError::NoSelection { .. } => ErrorCode::SelectionError,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        AppError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ValidationError;

    #[test]
    fn test_selection_error_conversion() {
        let err: AppError = CoreError::no_selection("delete").into();
        assert_eq!(err.code, ErrorCode::SelectionError);
        assert_eq!(err.message, "Please select a product to delete.");
        assert_eq!(err.title(), "Error");
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: AppError = CoreError::from(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("Please fill in all the fields correctly."));
    }

    #[test]
    fn test_db_error_conversion() {
        let err: AppError = DbError::QueryFailed("disk I/O error".to_string()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.title(), "Database Error");
        assert!(err.message.contains("disk I/O error"));
    }
}
