//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate holds the inventory domain as plain data and pure functions.
//! Nothing in here touches the database, the file system or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Inventory window (apps/desktop)                 │   │
//! │  │     List view ──► Add / Edit form ──► Delete confirmation       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │      ┌───────────┐      ┌─────────────┐     ┌────────────┐      │   │
//! │  │      │   types   │      │ validation  │     │   error    │      │   │
//! │  │      │  Product  │      │ ProductForm │     │ Validation │      │   │
//! │  │      │ ProductId │      │   → Input   │     │   Error    │      │   │
//! │  │      └───────────┘      └─────────────┘     └────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  stockroom-db (Store)                           │   │
//! │  │              SQLite table, repository, migrations               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, ProductForm, ProductInput)
//! - [`validation`] - Form field rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::ProductForm;
//!
//! let form = ProductForm::new("Widget", "A small widget", "10", "2.50");
//! let input = form.validate().unwrap();
//!
//! assert_eq!(input.quantity, 10);
//! assert_eq!(input.price, 2.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use types::*;
