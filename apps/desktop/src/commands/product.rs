//! # Product Commands
//!
//! Handlers behind the window's buttons, independent of any widget toolkit.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Save pressed with (form fields, target id)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  form.validate() ── fail ──► AppError(VALIDATION_ERROR), no store call  │
//! │       │                                                                 │
//! │       ▼ ok                                                              │
//! │  target = None      ──► store.create(input)                            │
//! │  target = Some(id)  ──► store.update(id, input)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;
use tracing::{debug, info};

use crate::error::AppError;
use stockroom_core::{CoreError, Product, ProductForm, ProductId};
use stockroom_db::ProductStore;

/// Validates `form` and persists it.
///
/// `target` is `None` for the Add form and the row id for the Edit form.
/// Returns the id of the saved row.
pub async fn save_product<S: ProductStore>(
    store: &S,
    target: Option<ProductId>,
    form: &ProductForm,
) -> Result<ProductId, AppError> {
    let input = form.validate().map_err(CoreError::from)?;

    match target {
        None => {
            let id = store.create(&input).await?;
            info!(%id, name = %input.name, "Product created");
            Ok(id)
        }
        Some(id) => {
            let touched = store.update(id, &input).await?;
            if touched {
                info!(%id, "Product updated");
            } else {
                debug!(%id, "Update matched no row");
            }
            Ok(id)
        }
    }
}

/// Permanently deletes a product. Deleting a missing id is not an error.
pub async fn remove_product<S: ProductStore>(store: &S, id: ProductId) -> Result<(), AppError> {
    if store.delete(id).await? {
        info!(%id, "Product deleted");
    } else {
        debug!(%id, "Delete matched no row");
    }
    Ok(())
}

/// Reads every product for the list view.
pub async fn load_products<S: ProductStore>(store: &S) -> Result<Vec<Product>, AppError> {
    let start = Instant::now();
    let products = store.list().await?;

    debug!(
        count = products.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Loaded products"
    );

    Ok(products)
}

/// Fetches the current stored values of one product.
pub async fn fetch_product<S: ProductStore>(store: &S, id: ProductId) -> Result<Product, AppError> {
    store
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product", id))
}
