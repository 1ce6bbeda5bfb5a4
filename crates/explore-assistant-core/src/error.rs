//! Error types for Explore Assistant Core

use thiserror::Error;

/// Main error type for Explore Assistant operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid explore id: {0}")]
    ExploreId(#[from] ExploreIdError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Connection pool error: {0}")]
    Pool(String),
}

/// Composite explore id errors ("<model>/<explore>")
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExploreIdError {
    #[error("missing '/' separator in {0:?}")]
    MissingSeparator(String),

    #[error("empty model name in {0:?}")]
    EmptyModel(String),

    #[error("empty explore name in {0:?}")]
    EmptyExplore(String),

    #[error("more than one '/' separator in {0:?}")]
    ExtraSeparator(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<r2d2::Error> for Error {
    fn from(err: r2d2::Error) -> Self {
        Error::Storage(StorageError::Pool(err.to_string()))
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
