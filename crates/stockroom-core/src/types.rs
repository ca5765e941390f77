//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   validate()  ┌─────────────────┐                  │
//! │  │  ProductForm    │ ────────────► │  ProductInput   │ ──► Store write  │
//! │  │  ─────────────  │               │  ─────────────  │                  │
//! │  │  name: String   │               │  name           │                  │
//! │  │  quantity: "10" │               │  quantity: 10   │                  │
//! │  │  price: "2.50"  │               │  price: 2.5     │                  │
//! │  └─────────────────┘               └─────────────────┘                  │
//! │          ▲                                                              │
//! │          │ to_form() (edit pre-fill)                                    │
//! │  ┌───────┴─────────┐                                                    │
//! │  │    Product      │ ◄── Store read                                     │
//! │  │  id: ProductId  │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validation;

// =============================================================================
// Product ID
// =============================================================================

/// Store-assigned product identifier.
///
/// Assigned once on insert and never reused, even after the row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw row id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    /// Returns the raw row id.
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product row as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier, assigned by the store.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Units on hand.
    pub quantity: i64,

    /// Unit price. Fractional values allowed.
    pub price: f64,
}

impl Product {
    /// Returns the editable fields as form text, for pre-filling the edit form.
    pub fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity.to_string(),
            price: self.price.to_string(),
        }
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// The four text fields of an add or edit form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub price: String,
}

impl ProductForm {
    /// Creates a form from raw field text.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        ProductForm {
            name: name.into(),
            description: description.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Checks every field and converts the form into a store-ready input.
    ///
    /// Fields are checked in form order, so the first error names the
    /// top-most offending field.
    pub fn validate(&self) -> Result<ProductInput, ValidationError> {
        validation::validate_required("name", &self.name)?;
        validation::validate_required("description", &self.description)?;
        let quantity = validation::parse_quantity(&self.quantity)?;
        let price = validation::parse_price(&self.price)?;

        Ok(ProductInput {
            name: self.name.clone(),
            description: self.description.clone(),
            quantity,
            price,
        })
    }
}

// =============================================================================
// Product Input
// =============================================================================

/// A validated form: the only shape the store accepts for writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
}

impl ProductInput {
    /// Attaches an id, producing the row this input would become.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
