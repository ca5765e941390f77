//! # Inventory Controller
//!
//! Drives the window: reads an action, validates, calls the store, and
//! re-populates the list.
//!
//! ## Form State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────┐  Save, invalid  ┌───────────────┐                           │
//! │   │ Open │ ──────────────► │ error dialog  │ ──┐                       │
//! │   └──────┘ ◄────────────── └───────────────┘   │ values kept           │
//! │     │  │        reopen                         │                       │
//! │     │  └───────────────────────────────────────┘                       │
//! │     │ Save, valid            closed                                    │
//! │     ▼                        ──────► Cancelled (no store call)         │
//! │   Persist ──► Closed ──► list refreshed                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every action runs to completion before the next one is read.

use tracing::{debug, error, info, warn};

use crate::commands;
use crate::error::{AppError, ErrorCode};
use crate::state::ListView;
use crate::ui::{Action, Dialogs};
use stockroom_core::{CoreError, ProductForm, ProductId};
use stockroom_db::ProductStore;

/// Text of the delete confirmation.
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";

/// How a form closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Saved(ProductId),
    Cancelled,
}

/// The inventory window's controller.
#[derive(Debug)]
pub struct InventoryController<S, D> {
    store: S,
    dialogs: D,
    view: ListView,
}

impl<S: ProductStore, D: Dialogs> InventoryController<S, D> {
    pub fn new(store: S, dialogs: D) -> Self {
        InventoryController {
            store,
            dialogs,
            view: ListView::new(),
        }
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs the window until the user quits.
    pub async fn run(&mut self) {
        self.handle(Action::Refresh).await;

        loop {
            self.dialogs.render(&self.view);
            let action = self.dialogs.next_action(&self.view);
            if !self.handle(action).await {
                break;
            }
        }

        info!("Window closed");
    }

    /// Handles one action. Returns `false` when the window should close.
    ///
    /// Errors are reported through the error dialog and never end the loop.
    pub async fn handle(&mut self, action: Action) -> bool {
        debug!(?action, "Handling action");

        let result = match action {
            Action::Add => self.add().await.map(|_| ()),
            Action::Edit => self.edit().await.map(|_| ()),
            Action::Delete => self.delete().await,
            Action::Refresh => self.refresh().await,
            Action::Select(index) => {
                self.view.select(index);
                Ok(())
            }
            Action::Quit => return false,
        };

        if let Err(err) = result {
            self.report(&err);
        }

        true
    }

    /// Re-populates the list from the store.
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        let rows = commands::load_products(&self.store).await?;
        self.view.populate(rows);
        Ok(())
    }

    /// Add flow: empty form, then create.
    pub async fn add(&mut self) -> Result<FormOutcome, AppError> {
        self.run_form("Add Product", None, ProductForm::default()).await
    }

    /// Edit flow: requires a selection; form pre-filled from the stored row.
    pub async fn edit(&mut self) -> Result<FormOutcome, AppError> {
        let id = self.selected_id("edit")?;

        let product = match commands::fetch_product(&self.store, id).await {
            Ok(product) => product,
            Err(err) if err.code == ErrorCode::NotFound => {
                self.refresh().await?;
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        self.run_form("Edit Product", Some(id), product.to_form()).await
    }

    /// Delete flow: requires a selection and a yes to the confirmation.
    pub async fn delete(&mut self) -> Result<(), AppError> {
        let id = self.selected_id("delete")?;

        if !self.dialogs.confirm("Confirm Delete", CONFIRM_DELETE) {
            debug!(%id, "Delete declined");
            return Ok(());
        }

        commands::remove_product(&self.store, id).await?;
        self.refresh().await
    }

    async fn run_form(
        &mut self,
        title: &str,
        target: Option<ProductId>,
        initial: ProductForm,
    ) -> Result<FormOutcome, AppError> {
        let mut current = initial;

        loop {
            let Some(form) = self.dialogs.edit_form(title, &current) else {
                debug!(title, "Form closed without saving");
                return Ok(FormOutcome::Cancelled);
            };

            match commands::save_product(&self.store, target, &form).await {
                Ok(id) => {
                    self.refresh().await?;
                    return Ok(FormOutcome::Saved(id));
                }
                Err(err) if err.code == ErrorCode::ValidationError => {
                    self.report(&err);
                    current = form;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn selected_id(&self, action: &str) -> Result<ProductId, AppError> {
        self.view
            .selected()
            .map(|p| p.id)
            .ok_or_else(|| CoreError::no_selection(action).into())
    }

    fn report(&mut self, err: &AppError) {
        match err.code {
            ErrorCode::DatabaseError | ErrorCode::Internal => {
                error!(code = ?err.code, message = %err.message, "Action failed");
            }
            ErrorCode::ValidationError | ErrorCode::SelectionError | ErrorCode::NotFound => {
                warn!(code = ?err.code, message = %err.message, "Action rejected");
            }
        }
        self.dialogs.show_error(err.title(), &err.message);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
