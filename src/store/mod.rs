//! Durable key-value persistence for the cached bang list.
//!
//! This module provides abstractions for storing and retrieving the
//! cached bang list and its refresh timestamp between invocations.

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::FileConfigStore;

use std::fmt;
use std::io;

use serde_json::Value;
use thiserror::Error;

/// Keys under which the cache is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The bang list (JSON array).
    Bangs,
    /// Time of the last successful refresh (milliseconds since the Unix epoch).
    LastRefreshed,
}

impl StoreKey {
    /// Returns the stable name of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bangs => "bangs",
            Self::LastRefreshed => "last_refreshed",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of reading one key from persistent storage.
///
/// Explicitly models all valid states to avoid ambiguity:
/// - A stored value was read
/// - Nothing is stored under the key (first run)
/// - Something is stored but could not be read or parsed
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    /// The stored value.
    Loaded(Value),

    /// No value is stored under the key.
    NotFound,

    /// A value exists but could not be read or parsed.
    /// Callers should treat this like [`LoadResult::NotFound`].
    Corrupted {
        /// Reason for corruption (for logging/debugging).
        reason: String,
    },
}

impl LoadResult {
    /// Returns the loaded value, or `None` for `NotFound`/`Corrupted`.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::NotFound | Self::Corrupted { .. } => None,
        }
    }

    /// Returns `true` if a value was successfully loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Errors that can occur when writing to the store.
///
/// Only covers write-side errors; read-side issues are modeled
/// as [`LoadResult`] variants to allow graceful degradation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to write the value to disk.
    #[error("Failed to write {key}: {source}")]
    Write {
        /// Key being written.
        key: StoreKey,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to serialize the value.
    #[error("Failed to serialize {key}: {source}")]
    Serialize {
        /// Key being written.
        key: StoreKey,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The background write task did not complete.
    #[error("Write task for {key} failed: {source}")]
    Task {
        /// Key being written.
        key: StoreKey,
        /// Underlying join error.
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Abstraction for persisting cache values between invocations.
///
/// Implementations should:
/// - Use atomic writes so a crash never leaves a half-written value
/// - Return `LoadResult::NotFound` for keys that were never written
/// - Return `LoadResult::Corrupted` for values that cannot be read back
pub trait ConfigStore: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: StoreKey) -> LoadResult;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn put(
        &self,
        key: StoreKey,
        value: &Value,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
