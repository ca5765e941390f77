//! # Stockroom Desktop Library
//!
//! ## Module Structure
//! ```text
//! src/
//! ├── main.rs          ─── Binary entry point
//! ├── lib.rs           ◄── You are here (startup & shutdown)
//! ├── error.rs         ─── AppError shown in the error dialog
//! ├── controller.rs    ─── InventoryController (Add / Edit / Delete / Refresh)
//! ├── commands/        ─── Toolkit-independent handlers
//! │   └── product.rs   ─── save_product, remove_product, load_products
//! ├── state/
//! │   ├── config.rs    ─── ConfigState (env + defaults)
//! │   └── list.rs      ─── ListView (rows + selection)
//! └── ui/
//!     ├── mod.rs       ─── Dialogs trait, Action
//!     └── terminal.rs  ─── inquire / tabled frontend
//! ```

pub mod commands;
pub mod controller;
pub mod error;
pub mod state;
pub mod ui;

#[cfg(test)]
mod testing;

use std::process::ExitCode;
use stockroom_db::{Database, DbConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::controller::InventoryController;
use crate::error::AppError;
use crate::state::ConfigState;
use crate::ui::TerminalUi;

/// Starts the application and blocks until the window closes.
///
/// ## Startup Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  run()                                                                  │
/// │     • tracing-subscriber with env filter                                │
/// │     • ConfigState::from_env()                                           │
/// │     • Database::new() → products table ready                            │
/// │     • InventoryController::run() until Quit                             │
/// │     • Database::close()                                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Returns a failure exit code only if the database cannot be opened.
pub fn run() -> ExitCode {
    init_tracing();

    info!("Starting Stockroom");

    let config = ConfigState::from_env();

    // One thread: every store call runs on the thread that reads user input.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to start async runtime");
            eprintln!("Failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_window(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, message = %e.message, "Startup failed");
            eprintln!("{}: {}", e.title(), e.message);
            ExitCode::FAILURE
        }
    }
}

async fn run_window(config: ConfigState) -> Result<(), AppError> {
    let db_path = config.resolve_database_path()?;
    info!(db_path = %db_path.display(), "Database path determined");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let products = db.products();
    let count = products.count().await?;
    info!(count, "Database connected and table ready");

    let mut controller = InventoryController::new(products, TerminalUi::new(config));
    controller.run().await;

    db.close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=debug` - Debug for stockroom crates only
/// - Default: WARN, so log lines don't interleave with the prompts
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
