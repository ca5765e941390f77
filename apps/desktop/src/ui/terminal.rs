//! # Terminal Frontend
//!
//! Renders the inventory window in a terminal: the product list as a table
//! and every dialog as a modal `inquire` prompt.
//!
//! ## Screen
//! ```text
//! Inventory Management System
//!
//! ╭───┬────────┬────────────────┬──────────┬───────╮
//! │   │ Name   │ Description    │ Quantity │ Price │
//! ├───┼────────┼────────────────┼──────────┼───────┤
//! │ ▶ │ Widget │ A small widget │       10 │   2.5 │
//! │   │ Gadget │ A big gadget   │        3 │    12 │
//! ╰───┴────────┴────────────────┴──────────┴───────╯
//! ? Action ›
//!   Add Product
//!   Edit Product
//!   Delete Product
//!   Refresh
//!   Select Product
//!   Quit
//! ```
//!
//! Esc or Ctrl-C inside a form closes it without saving. At the main menu
//! they close the window.

use inquire::error::InquireError;
use inquire::{Confirm, Select, Text};
use std::fmt;
use tabled::builder::Builder;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Color, Style};
use tracing::{debug, warn};

use super::{Action, Dialogs};
use crate::state::{ConfigState, ListView};
use stockroom_core::ProductForm;

/// Heading printed above the product table.
pub const WINDOW_TITLE: &str = "Inventory Management System";

/// Main window buttons, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Add,
    Edit,
    Delete,
    Refresh,
    Select,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 6] = [
        MenuItem::Add,
        MenuItem::Edit,
        MenuItem::Delete,
        MenuItem::Refresh,
        MenuItem::Select,
        MenuItem::Quit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::Add => "Add Product",
            MenuItem::Edit => "Edit Product",
            MenuItem::Delete => "Delete Product",
            MenuItem::Refresh => "Refresh",
            MenuItem::Select => "Select Product",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Terminal implementation of [`Dialogs`].
#[derive(Debug, Clone)]
pub struct TerminalUi {
    config: ConfigState,
}

impl TerminalUi {
    pub fn new(config: ConfigState) -> Self {
        TerminalUi { config }
    }

    /// Prompts for the row to select. `None` clears the selection.
    fn pick_row(&self, view: &ListView) -> Option<usize> {
        if view.is_empty() {
            println!("No products to select.");
            return None;
        }

        let labels: Vec<String> = view
            .rows()
            .iter()
            .map(|p| format!("{} ({})", p.name, p.description))
            .collect();

        let prompt = Select::new("Select a product:", labels)
            .with_starting_cursor(view.selected_index().unwrap_or(0));

        match prompt.raw_prompt() {
            Ok(choice) => Some(choice.index),
            Err(e) => {
                log_prompt_error("select", &e);
                view.selected_index()
            }
        }
    }
}

impl Dialogs for TerminalUi {
    fn render(&mut self, view: &ListView) {
        println!("\n{}", render_screen(view, &self.config));
    }

    fn next_action(&mut self, view: &ListView) -> Action {
        let item = match Select::new("Action", MenuItem::ALL.to_vec()).prompt() {
            Ok(item) => item,
            Err(e) => {
                log_prompt_error("menu", &e);
                MenuItem::Quit
            }
        };

        match item {
            MenuItem::Add => Action::Add,
            MenuItem::Edit => Action::Edit,
            MenuItem::Delete => Action::Delete,
            MenuItem::Refresh => Action::Refresh,
            MenuItem::Select => Action::Select(self.pick_row(view)),
            MenuItem::Quit => Action::Quit,
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        eprintln!("\n✖ {}: {}", title, message);

        // Block until acknowledged, like a modal message box.
        if let Err(e) = Select::new("", vec!["OK"]).prompt() {
            log_prompt_error("error dialog", &e);
        }
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        println!("\n{}", title);

        match Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                log_prompt_error("confirm", &e);
                false
            }
        }
    }

    fn edit_form(&mut self, title: &str, initial: &ProductForm) -> Option<ProductForm> {
        println!("\n── {} ──", title);

        let name = prompt_field("Name:", &initial.name)?;
        let description = prompt_field("Description:", &initial.description)?;
        let quantity = prompt_field("Quantity:", &initial.quantity)?;
        let price = prompt_field("Price:", &initial.price)?;

        Some(ProductForm {
            name,
            description,
            quantity,
            price,
        })
    }
}

/// Reads one form field, starting from `initial`. `None` closes the form.
fn prompt_field(label: &str, initial: &str) -> Option<String> {
    match Text::new(label).with_initial_value(initial).prompt() {
        Ok(value) => Some(value),
        Err(e) => {
            log_prompt_error("form", &e);
            None
        }
    }
}

fn log_prompt_error(prompt: &str, err: &InquireError) {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            debug!(prompt, "Prompt closed by user");
        }
        other => warn!(prompt, error = %other, "Prompt failed"),
    }
}

/// Builds the full window: title heading, then the product table.
pub fn render_screen(view: &ListView, config: &ConfigState) -> String {
    format!("{}\n\n{}", WINDOW_TITLE, render_table(view, config))
}

/// Builds the product table. The id is not shown; the selected row is
/// marked in the first column.
pub fn render_table(view: &ListView, config: &ConfigState) -> String {
    if view.is_empty() {
        return "No products. Choose \"Add Product\" to create one.".to_string();
    }

    let selected = view.selected_index();
    let mut builder = Builder::default();
    builder.push_record([
        String::new(),
        "Name".to_string(),
        "Description".to_string(),
        "Quantity".to_string(),
        "Price".to_string(),
    ]);

    for (index, product) in view.rows().iter().enumerate() {
        let marker = if selected == Some(index) { "▶" } else { "" };
        builder.push_record([
            marker.to_string(),
            product.name.clone(),
            product.description.clone(),
            product.quantity.to_string(),
            config.format_price(product.price),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..5), Alignment::right());

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Product, ProductId};

    fn view() -> ListView {
        let mut view = ListView::new();
        view.populate(vec![Product {
            id: ProductId::new(4242),
            name: "Widget".to_string(),
            description: "A small widget".to_string(),
            quantity: 10,
            price: 2.5,
        }]);
        view
    }

    #[test]
    fn test_table_shows_fields_but_not_id() {
        let table = render_table(&view(), &ConfigState::default());

        assert!(table.contains("Widget"));
        assert!(table.contains("A small widget"));
        assert!(table.contains("10"));
        assert!(table.contains("2.5"));
        assert!(!table.contains("4242"));
        assert!(!table.contains('▶'));
    }

    #[test]
    fn test_table_marks_selection_and_currency() {
        let mut view = view();
        view.select(Some(0));
        let config = ConfigState {
            currency_symbol: "$".to_string(),
            ..ConfigState::default()
        };

        let table = render_table(&view, &config);
        assert!(table.contains('▶'));
        assert!(table.contains("$2.5"));
    }

    #[test]
    fn test_empty_table_message() {
        let table = render_table(&ListView::new(), &ConfigState::default());
        assert!(table.starts_with("No products."));
    }

    #[test]
    fn test_screen_starts_with_window_title() {
        let screen = render_screen(&view(), &ConfigState::default());

        assert!(screen.starts_with("Inventory Management System\n"));
        assert!(screen.contains("Widget"));

        let empty = render_screen(&ListView::new(), &ConfigState::default());
        assert!(empty.starts_with(WINDOW_TITLE));
        assert!(empty.contains("No products."));
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<String> = MenuItem::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            labels,
            ["Add Product", "Edit Product", "Delete Product", "Refresh", "Select Product", "Quit"]
        );
    }
}
