//! # Application State
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventoryController                                                    │
//! │          ┌──────────────────┬──────────────────┐                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ ProductStore │  │   ListView   │  │   ConfigState    │              │
//! │  │ (one SQLite  │  │  rows +      │  │  db path         │              │
//! │  │  connection) │  │  selection   │  │  currency symbol │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  ConfigState is read-only after startup. ListView is rebuilt from the  │
//! │  store after every mutation.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod list;

pub use config::{ConfigState, DATABASE_FILE_NAME};
pub use list::ListView;
