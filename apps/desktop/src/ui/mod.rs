//! # Frontend Seam
//!
//! What the controller needs from a window toolkit. The terminal frontend in
//! [`terminal`] implements it; controller tests use a scripted fake.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Window surface                 Dialogs method                          │
//! │  ─────────────────────────────  ─────────────────────────────────────   │
//! │  product table                  render(&ListView)                       │
//! │  Add/Edit/Delete/Refresh/...    next_action(&ListView) -> Action        │
//! │  Add / Edit modal form          edit_form(title, initial) -> Option<..> │
//! │  delete confirmation            confirm(title, message) -> bool         │
//! │  error dialog                   show_error(title, message)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod terminal;

use stockroom_core::ProductForm;

use crate::state::ListView;

pub use terminal::TerminalUi;

/// A user action read from the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Edit,
    Delete,
    Refresh,
    /// Select the row at this index, or clear the selection.
    Select(Option<usize>),
    /// Window closed.
    Quit,
}

/// Blocking, modal interaction with the user.
pub trait Dialogs {
    /// Draws the product list with its selection.
    fn render(&mut self, view: &ListView);

    /// Waits for the next action on the main window.
    fn next_action(&mut self, view: &ListView) -> Action;

    /// Shows a blocking error dialog.
    fn show_error(&mut self, title: &str, message: &str);

    /// Asks a yes/no question. Closing the dialog counts as no.
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    /// Opens a modal form pre-filled with `initial` and returns the field
    /// values when Save is pressed, or `None` if the form was closed.
    fn edit_form(&mut self, title: &str, initial: &ProductForm) -> Option<ProductForm>;
}
