//! # Product Repository
//!
//! SQL for the `products` table. One statement per operation, each
//! auto-committed on its own.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::migrations;
use crate::store::ProductStore;
use stockroom_core::{Product, ProductId, ProductInput};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.create(&input).await?;
/// let rows = repo.list().await?;
/// repo.delete(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Counts all products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

impl ProductStore for ProductRepository {
    async fn initialize(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Inserts a new product.
    ///
    /// The id comes from `AUTOINCREMENT`, so it is never one that a deleted
    /// row already used.
    async fn create(&self, input: &ProductInput) -> DbResult<ProductId> {
        debug!(name = %input.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, quantity, price)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.quantity)
        .bind(input.price)
        .execute(&self.pool)
        .await?;

        let id = ProductId::new(result.last_insert_rowid());
        debug!(%id, "Product inserted");
        Ok(id)
    }

    /// Lists all products in ascending id order.
    async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, quantity, price
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    async fn get(&self, id: ProductId) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, quantity, price
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Overwrites name, description, quantity and price of `id`.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row updated
    /// * `Ok(false)` - No such row; nothing changed
    async fn update(&self, id: ProductId, input: &ProductInput) -> DbResult<bool> {
        debug!(%id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                quantity = ?4,
                price = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.quantity)
        .bind(input.price)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Permanently removes `id`.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row deleted
    /// * `Ok(false)` - No such row; nothing changed
    async fn delete(&self, id: ProductId) -> DbResult<bool> {
        debug!(%id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use stockroom_core::ProductForm;

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    fn input(name: &str, description: &str, quantity: &str, price: &str) -> ProductInput {
        ProductForm::new(name, description, quantity, price)
            .validate()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = repo().await;
        let widget = input("Widget", "A small widget", "10", "2.50");

        let id = repo.create(&widget).await.unwrap();
        let rows = repo.list().await.unwrap();

        assert_eq!(rows, vec![widget.with_id(id)]);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let repo = repo().await;
        let a = repo.create(&input("A", "first", "1", "1")).await.unwrap();
        let b = repo.create(&input("B", "second", "2", "2")).await.unwrap();

        assert_ne!(a, b);
        let ids: Vec<_> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;
        let first = repo.create(&input("A", "first", "1", "1")).await.unwrap();
        assert!(repo.delete(first).await.unwrap());

        let second = repo.create(&input("B", "second", "2", "2")).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let repo = repo().await;
        let id = repo
            .create(&input("Widget", "A small widget", "10", "2.50"))
            .await
            .unwrap();

        let changed = input("Widget", "A small widget", "5", "2.50");
        assert!(repo.update(id, &changed).await.unwrap());

        let product = repo.get(id).await.unwrap().unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.quantity, 5);
        assert_eq!(product.name, "Widget");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let repo = repo().await;
        let id = repo.create(&input("A", "first", "1", "1")).await.unwrap();
        let before = repo.list().await.unwrap();

        let touched = repo
            .update(ProductId::new(id.get() + 100), &input("Z", "z", "9", "9"))
            .await
            .unwrap();

        assert!(!touched);
        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = repo().await;
        let keep = repo.create(&input("A", "first", "1", "1")).await.unwrap();
        let gone = repo.create(&input("B", "second", "2", "2")).await.unwrap();

        assert!(repo.delete(gone).await.unwrap());

        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, keep);
        assert!(repo.get(gone).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let repo = repo().await;
        repo.create(&input("A", "first", "1", "1")).await.unwrap();

        assert!(!repo.delete(ProductId::new(999)).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_widget_scenario() {
        let repo = repo().await;

        let id = repo
            .create(&input("Widget", "A small widget", "10", "2.50"))
            .await
            .unwrap();
        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            (rows[0].name.as_str(), rows[0].description.as_str(), rows[0].quantity, rows[0].price),
            ("Widget", "A small widget", 10, 2.5)
        );

        let mut form = rows[0].to_form();
        form.quantity = "5".to_string();
        repo.update(id, &form.validate().unwrap()).await.unwrap();
        let rows = repo.list().await.unwrap();
        assert_eq!(rows[0].quantity, 5);
        assert_eq!(rows[0].name, "Widget");

        repo.delete(id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_through_store_keeps_rows() {
        let repo = repo().await;
        repo.create(&input("A", "first", "1", "1")).await.unwrap();

        repo.initialize().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
