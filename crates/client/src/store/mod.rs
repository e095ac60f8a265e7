//! Key-value record store.
//!
//! Persists JSON-serializable records under named keys, one file per key.
//! This is the single durable layer of the app: the auth and payment-method
//! registries are built on top of it.
//!
//! # Contract
//!
//! - At most one value per key; [`RecordStore::set`] fully replaces the prior
//!   value, there is no partial merge.
//! - A missing record reads as `None`.
//! - A malformed record also reads as `None`: corrupted local state resets
//!   that feature to empty instead of blocking the whole app. This
//!   parse-or-default path is deliberate and covered by tests.
//! - I/O failures propagate unchanged; there is no retry.

pub mod ids;
pub mod keys;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::fs;
use tracing::debug;

/// Errors from the record store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Durable I/O failed. Propagated to the caller without retry.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded as JSON before writing.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed record store, one JSON file per key.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Directory this store persists into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the raw JSON value stored under `key`.
    ///
    /// Missing and malformed records both read as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the read fails for any reason other
    /// than the record being absent.
    pub async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let Some(bytes) = self.read_bytes(key).await? else {
            return Ok(None);
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                debug!(key, error = %err, "malformed record, treating as absent");
                Ok(None)
            }
        }
    }

    /// Write `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Encode` if the value cannot be serialized, or
    /// `StorageError::Io` if the write fails.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        fs::write(self.path_for(key), bytes).await?;
        debug!(key, "record written");
        Ok(())
    }

    /// Remove the record under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the removal fails for any reason other
    /// than the record being absent.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Read a typed record, falling back to `T::default()` when the record
    /// is absent or malformed.
    ///
    /// This is the parse-or-default contract the registries rely on: a
    /// corrupted users or payment-methods blob degrades to empty rather than
    /// surfacing an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` only for genuine I/O failures.
    pub async fn read_or_default<T>(&self, key: &str) -> Result<T, StorageError>
    where
        T: DeserializeOwned + Default,
    {
        let Some(bytes) = self.read_bytes(key).await? else {
            return Ok(T::default());
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(value),
            Err(err) => {
                debug!(key, error = %err, "malformed record, using default");
                Ok(T::default())
            }
        }
    }

    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
