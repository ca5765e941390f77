//! # Product Store Seam
//!
//! The operations the inventory controller needs from persistence.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventoryController<S: ProductStore, ..>                               │
//! │       │                                                                 │
//! │       ├──► ProductRepository   (SQLite, production)                    │
//! │       └──► in-memory fake      (controller tests)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every write is a single auto-committed statement. `update` and `delete`
//! on an id that does not exist succeed and change nothing; the returned
//! `bool` says whether a row was touched.

use stockroom_core::{Product, ProductId, ProductInput};

use crate::error::DbResult;

/// Persistence for the product collection.
#[allow(async_fn_in_trait)]
pub trait ProductStore {
    /// Ensures the backing table exists. Idempotent.
    async fn initialize(&self) -> DbResult<()>;

    /// Inserts a product and returns its newly assigned id.
    async fn create(&self, input: &ProductInput) -> DbResult<ProductId>;

    /// Returns every product, ordered by ascending id.
    async fn list(&self) -> DbResult<Vec<Product>>;

    /// Looks up one product.
    async fn get(&self, id: ProductId) -> DbResult<Option<Product>>;

    /// Overwrites all mutable fields of `id`.
    async fn update(&self, id: ProductId, input: &ProductInput) -> DbResult<bool>;

    /// Removes `id` permanently.
    async fn delete(&self, id: ProductId) -> DbResult<bool>;
}
