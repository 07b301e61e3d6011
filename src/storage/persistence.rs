/// Reads and writes the dataset document through a key-value store
///
/// Every save rewrites the whole document; there are no partial writes.
/// Loading never fails: a missing document is an empty dataset, and a
/// document that cannot be read or parsed is reported and replaced by an
/// empty dataset.

use crate::domain::Dataset;
use crate::storage::{KeyValueStore, StorageError, DEFAULT_STORAGE_KEY};

/// Result of loading the dataset
#[derive(Debug)]
pub struct Loaded {
    pub dataset: Dataset,
    /// Recoverable error met while loading; `dataset` is empty when set
    pub error: Option<StorageError>,
}

/// Dataset codec bound to one store and one fixed key
pub struct Persistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Persist under [`DEFAULT_STORAGE_KEY`]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the full dataset
    pub fn load(&self) -> Loaded {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored dataset under '{}', starting empty", self.key);
                return Loaded { dataset: Dataset::default(), error: None };
            }
            Err(e) => {
                tracing::warn!("Failed to read stored dataset, starting empty: {}", e);
                return Loaded { dataset: Dataset::default(), error: Some(e) };
            }
        };

        match serde_json::from_str::<Dataset>(&raw) {
            Ok(dataset) => {
                tracing::debug!("Loaded {} month record(s) from '{}'", dataset.months.len(), self.key);
                Loaded { dataset, error: None }
            }
            Err(e) => {
                tracing::warn!("Stored dataset is malformed, starting empty: {}", e);
                Loaded {
                    dataset: Dataset::default(),
                    error: Some(StorageError::Parse(e)),
                }
            }
        }
    }

    /// Serialize the full dataset and overwrite the stored document
    pub fn save(&mut self, dataset: &Dataset) -> Result<(), StorageError> {
        let raw = serde_json::to_string(dataset)?;
        self.store.set(&self.key, &raw)?;
        tracing::debug!("Saved {} month record(s) to '{}'", dataset.months.len(), self.key);
        Ok(())
    }
}
