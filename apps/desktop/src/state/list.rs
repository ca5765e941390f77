//! # List View State
//!
//! The rows currently shown in the window and which one is selected.
//!
//! The view is a snapshot: it only changes when the controller re-populates
//! it from the store (after every mutation, and on Refresh).

use stockroom_core::{Product, ProductId};

/// Rendered product list plus selection.
///
/// Selection is kept by id, so it follows its row across a refresh and is
/// dropped when the row is gone.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    rows: Vec<Product>,
    selected: Option<ProductId>,
}

impl ListView {
    pub fn new() -> Self {
        ListView::default()
    }

    /// Replaces all rows with a fresh store listing.
    pub fn populate(&mut self, rows: Vec<Product>) {
        if let Some(id) = self.selected {
            if !rows.iter().any(|p| p.id == id) {
                self.selected = None;
            }
        }
        self.rows = rows;
    }

    /// Selects the row at `index`, or clears the selection with `None`.
    ///
    /// An out-of-range index clears the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.and_then(|i| self.rows.get(i)).map(|p| p.id);
    }

    /// Returns the selected row, if any.
    pub fn selected(&self) -> Option<&Product> {
        let id = self.selected?;
        self.rows.iter().find(|p| p.id == id)
    }

    /// Returns the index of the selected row, if any.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.rows.iter().position(|p| p.id == id)
    }

    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
