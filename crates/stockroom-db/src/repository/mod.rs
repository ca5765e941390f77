//! # Repository Module
//!
//! SQLite implementations of the store traits.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventoryController                                                    │
//! │       │                                                                 │
//! │       │  store.create(&input)                                           │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&self, input)       INSERT                                 │
//! │  ├── list(&self)                SELECT ... ORDER BY id                 │
//! │  ├── update(&self, id, input)   UPDATE ... WHERE id = ?                │
//! │  └── delete(&self, id)          DELETE ... WHERE id = ?                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD

pub mod product;
