//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - User-recoverable domain errors                 │
//! │  └── ValidationError  - Form field failures                            │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Desktop app errors                                                    │
//! │  └── AppError         - What the error dialog shows                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → error dialog           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors the user can recover from without leaving the window.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Edit or delete was invoked while no list row is selected.
    #[error("Please select a product to {action}.")]
    NoSelection { action: String },

    /// A form failed validation.
    #[error("Please fill in all the fields correctly. {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NoSelection error for the given action ("edit", "delete").
    pub fn no_selection(action: impl Into<String>) -> Self {
        CoreError::NoSelection {
            action: action.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form field validation errors.
///
/// Raised before any store call, so a failed validation never writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field text does not parse as the expected kind of number.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_message() {
        assert_eq!(
            CoreError::no_selection("edit").to_string(),
            "Please select a product to edit."
        );
        assert_eq!(
            CoreError::no_selection("delete").to_string(),
            "Please select a product to delete."
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
        assert_eq!(err.field(), "name");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a non-negative number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "price has invalid format: must be a non-negative number"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "description".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Please fill in all the fields correctly. description is required"
        );
    }
}
