//! # Stockroom Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Open the database and initialize the products table
//! 4. Run the inventory window until the user quits
//! 5. Close the database

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    stockroom_desktop_lib::run()
}
