//! # Validation Module
//!
//! Field rules for the add and edit forms.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field         Accepts                       Rejects                    │
//! │  ───────────   ───────────────────────────   ────────────────────────   │
//! │  name          any non-empty text            ""                         │
//! │  description   any non-empty text            ""                         │
//! │  quantity      ASCII digits only: "0", "10"  "abc", "-1", "1.5", ""     │
//! │  price         digits, at most one '.'       "1.2.3", "-2", "", "."     │
//! │                "0", "19.99", ".5", "5."                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same rules run on add and on edit. No sign characters are accepted,
//! so a value that passes is always non-negative.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_quantity("0").unwrap(), 0);
//! assert_eq!(parse_price("19.99").unwrap(), 19.99);
//! assert!(parse_price("1.2.3").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is not empty.
///
/// Whitespace counts as content; only the empty string is rejected.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a quantity: one or more ASCII digits.
pub fn parse_quantity(value: &str) -> ValidationResult<i64> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("quantity", "must be a whole number of 0 or more"));
    }

    value
        .parse::<i64>()
        .map_err(|_| invalid("quantity", "is too large"))
}

/// Parses a price: ASCII digits with at most one decimal point.
pub fn parse_price(value: &str) -> ValidationResult<f64> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let mut dots = 0;
    let mut digits = 0;
    for c in value.chars() {
        match c {
            '.' => dots += 1,
            c if c.is_ascii_digit() => digits += 1,
            _ => return Err(invalid("price", "must be a number of 0 or more")),
        }
    }

    if dots > 1 {
        return Err(invalid("price", "must have at most one decimal point"));
    }

    if digits == 0 {
        return Err(invalid("price", "must contain at least one digit"));
    }

    let price = value
        .parse::<f64>()
        .map_err(|_| invalid("price", "must be a number of 0 or more"))?;

    if !price.is_finite() {
        return Err(invalid("price", "is too large"));
    }

    Ok(price)
}

fn invalid(field: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
