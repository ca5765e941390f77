//! # Database Connection Management
//!
//! Opens the single SQLite connection the app holds for its lifetime.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Lifecycle                                 │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure file and timeouts                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Open + initialize table                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │   SqlitePool (max_connections = 1)      │                           │
//! │  │   ┌─────┐                               │                           │
//! │  │   │Conn1│  never idles out, never       │                           │
//! │  │   └─────┘  recycled                     │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  User actions, one statement each                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::close().await ← Window closed                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Journal Mode
//! The rollback journal (`DELETE`) is used so the database stays a single
//! file on disk between runs.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::product::ProductRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Path marker used by [`DbConfig::in_memory`].
const IN_MEMORY_PATH: &str = ":memory:";

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/inventory.db")
///     .connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long to wait for the connection to open.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Whether to create the products table on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// The file is created on first connect if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            connect_timeout: Duration::from_secs(30),
            run_migrations: true,
        }
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to create the products table on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Every in-memory database is private to its `Database` handle.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            connect_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Returns true for the configuration built by [`DbConfig::in_memory`].
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }
}

// =============================================================================
// Database
// =============================================================================

/// Process-wide database handle.
///
/// Cloning is cheap: clones share the same underlying connection.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the database.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Opens exactly one connection and keeps it for the process lifetime
    /// 3. Creates the products table (if enabled)
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError)` - Connection or initialization failed
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        // Filename, not a URL: `?` and `%` in the path are literal.
        let base_options = if config.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new().filename(&config.database_path)
        };

        let connect_options = base_options
            .journal_mode(SqliteJournalMode::Delete)
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!("Database connection opened");

        let db = Database { pool };

        if config.run_migrations {
            db.initialize().await?;
        }

        Ok(db)
    }

    /// Ensures the products table exists.
    ///
    /// Idempotent: existing rows are never touched.
    pub async fn initialize(&self) -> DbResult<()> {
        info!("Initializing products table");
        migrations::run_migrations(&self.pool).await?;

        match migrations::migration_status(&self.pool).await {
            Ok((total, applied)) => debug!(total, applied, "Migration status"),
            Err(e) => warn!(error = %e, "Could not read migration status"),
        }

        Ok(())
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Closes the connection. Call when the window closes.
    ///
    /// After calling close, all repository operations fail with
    /// `DbError::ConnectionFailed`.
    pub async fn close(&self) {
        info!("Closing database connection");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProductStore;
    use stockroom_core::ProductForm;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
        assert!(db.products().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .connect_timeout(Duration::from_secs(2))
            .run_migrations(false);

        assert_eq!(config.database_path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert!(!config.run_migrations);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let input = ProductForm::new("Widget", "A small widget", "10", "2.50")
            .validate()
            .unwrap();
        db.products().create(&input).await.unwrap();

        db.initialize().await.unwrap();
        db.initialize().await.unwrap();

        assert_eq!(db.products().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let input = ProductForm::new("Widget", "A small widget", "10", "2.50")
            .validate()
            .unwrap();
        let id = db.products().create(&input).await.unwrap();
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let rows = db.products().list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].name, "Widget");
        db.close().await;
    }

    #[tokio::test]
    async fn test_adopts_table_created_without_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");

        // A file from an earlier version: table and rows, no migration ledger.
        let bare = Database::new(DbConfig::new(&path).run_migrations(false))
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE products (id INTEGER PRIMARY KEY AUTOINCREMENT, \
             name TEXT, description TEXT, quantity INTEGER, price REAL)",
        )
        .execute(bare.pool())
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO products (name, description, quantity, price) \
             VALUES ('Bolt', 'M6 bolt', 100, 0.1)",
        )
        .execute(bare.pool())
        .await
        .unwrap();
        bare.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let rows = db.products().list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Bolt");
        db.close().await;
    }

    #[tokio::test]
    async fn test_opens_path_with_url_characters() {
        let dir = tempfile::tempdir().unwrap();

        for name in ["stock?room", "100%25stock", "inv#1", "my stock"] {
            let folder = dir.path().join(name);
            std::fs::create_dir(&folder).unwrap();
            let path = folder.join("inventory.db");

            let db = Database::new(DbConfig::new(&path)).await.unwrap();
            let input = ProductForm::new("Widget", "A small widget", "10", "2.50")
                .validate()
                .unwrap();
            db.products().create(&input).await.unwrap();
            db.close().await;

            assert!(path.is_file(), "database file missing under {:?}", name);
        }
    }

    #[test]
    fn test_in_memory_config_detection() {
        assert!(DbConfig::in_memory().is_in_memory());
        assert!(!DbConfig::new("/tmp/inventory.db").is_in_memory());
    }

    #[tokio::test]
    async fn test_operations_fail_after_close() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
        let err = db.products().list().await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }
}
