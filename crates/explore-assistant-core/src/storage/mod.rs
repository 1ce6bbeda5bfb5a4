//! SQLite persistence for sidebar history and settings
//!
//! A small r2d2 pool hands out connections; every pool runs the schema
//! migrations once on creation.

mod migrations;
mod queries;

pub use migrations::run_migrations;
pub use queries::*;

use crate::error::{Result, StorageError};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::{Path, PathBuf};
use tracing::info;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EXPLORE_ASSISTANT_DATA_DIR";

pub const DB_FILE_NAME: &str = "explore-assistant.db";

const FILE_POOL_SIZE: u32 = 4;

/// `$EXPLORE_ASSISTANT_DATA_DIR`, else `<platform data dir>/explore-assistant`
pub fn default_data_dir() -> PathBuf {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("explore-assistant"),
    }
}

pub struct Storage {
    pool: DbPool,
    db_path: PathBuf,
}

impl Storage {
    /// Open (or create) the database inside `data_dir`
    pub fn new_with_path(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir).map_err(|e| {
            StorageError::Database(format!("cannot create {:?}: {}", data_dir, e))
        })?;
        Self::from_path(data_dir.join(DB_FILE_NAME))
    }

    /// Open (or create) the database file at `db_path`
    pub fn from_path(db_path: PathBuf) -> Result<Self> {
        info!("Opening history database at {:?}", db_path);
        let manager = SqliteConnectionManager::file(&db_path);
        Self::open(manager, FILE_POOL_SIZE, db_path)
    }

    /// Single-connection in-memory database, used by tests and as a fallback
    pub fn in_memory() -> Result<Self> {
        // Each in-memory connection is its own database, so the pool holds one
        Self::open(SqliteConnectionManager::memory(), 1, PathBuf::from(":memory:"))
    }

    fn open(manager: SqliteConnectionManager, max_size: u32, db_path: PathBuf) -> Result<Self> {
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(|e| StorageError::Pool(e.to_string()))?;

        run_migrations(&*pool.get()?)?;
        Ok(Self { pool, db_path })
    }

    pub fn connection(&self) -> Result<DbConnection> {
        Ok(self.pool.get()?)
    }

    pub fn db_path(&self) -> &PathBuf {
        &self.db_path
    }
}
