//! Test doubles for the store and dialog seams.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};

use stockroom_core::{Product, ProductForm, ProductId, ProductInput};
use stockroom_db::{DbError, DbResult, ProductStore};

use crate::state::ListView;
use crate::ui::{Action, Dialogs};

/// In-memory store with the same id semantics as the SQLite table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RefCell<BTreeMap<ProductId, Product>>,
    last_id: Cell<i64>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Makes every following create/update/delete fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn check_writable(&self) -> DbResult<()> {
        if self.fail_writes.get() {
            return Err(DbError::QueryFailed("attempt to write a readonly database".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl ProductStore for MemoryStore {
    async fn initialize(&self) -> DbResult<()> {
        Ok(())
    }

    async fn create(&self, input: &ProductInput) -> DbResult<ProductId> {
        self.check_writable()?;
        let id = ProductId::new(self.last_id.get() + 1);
        self.last_id.set(id.get());
        self.rows.borrow_mut().insert(id, input.clone().with_id(id));
        Ok(id)
    }

    async fn list(&self) -> DbResult<Vec<Product>> {
        Ok(self.rows.borrow().values().cloned().collect())
    }

    async fn get(&self, id: ProductId) -> DbResult<Option<Product>> {
        Ok(self.rows.borrow().get(&id).cloned())
    }

    async fn update(&self, id: ProductId, input: &ProductInput) -> DbResult<bool> {
        self.check_writable()?;
        let mut rows = self.rows.borrow_mut();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = input.clone().with_id(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> DbResult<bool> {
        self.check_writable()?;
        Ok(self.rows.borrow_mut().remove(&id).is_some())
    }
}

/// Dialogs that replay scripted answers and record what was shown.
///
/// Running out of scripted actions closes the window; running out of forms
/// or confirmations closes the dialog.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub actions: VecDeque<Action>,
    pub forms: VecDeque<Option<ProductForm>>,
    pub confirms: VecDeque<bool>,

    /// (title, message) of every error dialog.
    pub errors: Vec<(String, String)>,
    /// (title, initial values) of every form opened.
    pub opened_forms: Vec<(String, ProductForm)>,
    /// Messages of every confirmation asked.
    pub asked: Vec<String>,
    pub renders: usize,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        ScriptedDialogs::default()
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn with_form(mut self, form: ProductForm) -> Self {
        self.forms.push_back(Some(form));
        self
    }

    pub fn with_closed_form(mut self) -> Self {
        self.forms.push_back(None);
        self
    }

    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }
}

impl Dialogs for ScriptedDialogs {
    fn render(&mut self, _view: &ListView) {
        self.renders += 1;
    }

    fn next_action(&mut self, _view: &ListView) -> Action {
        self.actions.pop_front().unwrap_or(Action::Quit)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }

    fn confirm(&mut self, _title: &str, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirms.pop_front().unwrap_or(false)
    }

    fn edit_form(&mut self, title: &str, initial: &ProductForm) -> Option<ProductForm> {
        self.opened_forms.push((title.to_string(), initial.clone()));
        self.forms.pop_front().flatten()
    }
}
