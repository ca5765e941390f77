//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::AppError;

/// File name of the database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "inventory.db";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Explicit database file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Prefix shown before prices in the list, e.g. "$".
    /// Default: empty (prices shown as plain numbers)
    pub currency_symbol: String,
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_DB_PATH`: Use this database file
    /// - `STOCKROOM_CURRENCY_SYMBOL`: Price prefix in the list
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("STOCKROOM_DB_PATH").filter(|p| !p.is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Resolves the database file path.
    ///
    /// ## Platform-Specific Defaults
    /// - **macOS**: `~/Library/Application Support/com.stockroom.stockroom/inventory.db`
    /// - **Windows**: `%APPDATA%\stockroom\stockroom\data\inventory.db`
    /// - **Linux**: `~/.local/share/stockroom/inventory.db`
    ///
    /// The data directory is created if it doesn't exist.
    pub fn resolve_database_path(&self) -> Result<PathBuf, AppError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let proj_dirs = ProjectDirs::from("com", "stockroom", "stockroom")
            .ok_or_else(|| AppError::internal("Could not determine app data directory"))?;

        let data_dir = proj_dirs.data_dir();

        std::fs::create_dir_all(data_dir).map_err(|e| {
            AppError::internal(format!(
                "Could not create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        Ok(data_dir.join(DATABASE_FILE_NAME))
    }

    /// Formats a price for the list view.
    pub fn format_price(&self, price: f64) -> String {
        format!("{}{}", self.currency_symbol, price)
    }
}
