//! File-based cache persistence implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{ConfigStore, LoadResult, StoreError, StoreKey};

/// File-based implementation of [`ConfigStore`].
///
/// Stores each key as its own JSON file (`{key}.json`) inside a cache
/// directory, which is created on first write.
///
/// # Atomic Writes
///
/// Uses write-to-temp-then-rename pattern to prevent corruption:
/// 1. Write to `{key}.json.tmp`
/// 2. Rename `{key}.json.tmp` to `{key}.json`
///
/// This ensures each file is either fully written or not written at all.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    dir: PathBuf,
}

impl FileConfigStore {
    /// Creates a new file-based store rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    /// Performs the blocking write.
    ///
    /// Separated out so it can be wrapped in `spawn_blocking`.
    fn put_blocking(path: &Path, key: StoreKey, content: &str) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write { key, source };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        // Append .tmp instead of replacing extension (bangs.json -> bangs.json.tmp)
        let temp_path = PathBuf::from(format!("{}.tmp", path.display()));

        std::fs::write(&temp_path, content).map_err(write_err)?;
        std::fs::rename(&temp_path, path).map_err(write_err)?;

        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: StoreKey) -> LoadResult {
        let path = self.path_for(key);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadResult::NotFound,
            Err(e) => {
                return LoadResult::Corrupted {
                    reason: format!("Failed to read {}: {e}", path.display()),
                };
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(value) => LoadResult::Loaded(value),
            Err(e) => LoadResult::Corrupted {
                reason: format!("Invalid JSON in {}: {e}", path.display()),
            },
        }
    }

    async fn put(&self, key: StoreKey, value: &Value) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(value)
            .map_err(|source| StoreError::Serialize { key, source })?;
        let path = self.path_for(key);

        // Use spawn_blocking to avoid blocking the async runtime
        tokio::task::spawn_blocking(move || Self::put_blocking(&path, key, &content))
            .await
            .map_err(|source| StoreError::Task { key, source })?
    }
}
