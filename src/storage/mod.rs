/// Storage layer for persisting habit data
///
/// The whole dataset lives as one JSON document in a key-value store. This
/// module defines the store interface, its SQLite and in-memory backends, and
/// the persistence codec that reads and writes the dataset document.

pub mod memory;
pub mod migrations;
pub mod persistence;
pub mod sqlite;

// Re-export the main storage types
pub use memory::*;
pub use persistence::*;
pub use sqlite::*;

use thiserror::Error;

/// Key the dataset document is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "habitTrackerAllData";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored data could not be parsed: {0}")]
    Parse(serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the key-value interface the dataset is persisted through
///
/// This trait allows us to swap SQLite for another backend (or an in-memory
/// map in tests) while keeping the same interface.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
