/// Public library interface for the monthly habit tracker
///
/// This module exports the tracker session, the domain and analytics types it
/// works with, and the server that exposes the session to a UI over stdio.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod analytics;
mod session;
mod tools;
mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    KeyValueStore, Loaded, MemoryStore, Persistence, SqliteStore, StorageError,
    DEFAULT_STORAGE_KEY,
};
pub use analytics::*;
pub use session::{Session, SessionOptions};
pub use tools::*;
pub use mcp::McpServer;

/// Errors that can occur while driving the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    /// Short message suitable for a transient notification in the UI
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::Domain(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

/// Configuration for opening a tracker on a database file
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// SQLite file holding the key-value store
    pub db_path: PathBuf,
    /// Key the dataset document is stored under
    pub storage_key: String,
    /// Month selection at startup
    pub session: SessionOptions,
}

/// Habit tracker backed by a SQLite key-value store
///
/// This owns the session used by the stdio server and by tests.
pub struct HabitTrackerServer {
    session: Session<SqliteStore>,
}

impl HabitTrackerServer {
    /// Open the database at `config.db_path` and start a session
    ///
    /// This will initialize the SQLite schema if it doesn't already exist.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        tracing::info!("Initializing habit tracker with database: {:?}", config.db_path);

        let store = SqliteStore::new(config.db_path)?;
        let persistence = Persistence::with_key(store, config.storage_key);
        let session = Session::open(persistence, config.session);

        if let Some(e) = session.load_error() {
            tracing::warn!("Started with an empty dataset: {}", e);
        }

        Ok(Self { session })
    }

    /// Serve JSON-RPC requests over stdin/stdout until stdin closes
    pub async fn run(self) -> Result<(), TrackerError> {
        tracing::info!(
            "Starting server on {}, {} stored month(s)",
            self.session.active_key(),
            self.session.dataset().months.len()
        );

        let mut mcp_server = McpServer::new(self.session);
        mcp_server.run().await
    }

    /// Get a reference to the session (useful for testing)
    pub fn session(&self) -> &Session<SqliteStore> {
        &self.session
    }

    /// Get a mutable reference to the session
    pub fn session_mut(&mut self) -> &mut Session<SqliteStore> {
        &mut self.session
    }
}
