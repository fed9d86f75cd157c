//! Time-bounded caching of the bang list.
//!
//! This module provides:
//! - The persisted unit of the cache ([`CacheRecord`])
//! - Reading that unit back from a [`ConfigStore`] ([`CacheRecord::load`])
//! - The refresh policy that decides when to re-fetch ([`CacheRefresher`])

mod refresher;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use refresher::CacheRefresher;

use std::fmt;
use std::time::{Duration, SystemTime};

use serde_json::Value;

use crate::bangs::{self, BangsConfig};
use crate::store::{ConfigStore, LoadResult, StoreKey};
use crate::time::{from_unix_millis, unix_millis};

/// Default freshness window (10 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_millis(600_000);

/// A bang list together with the time it was fetched.
///
/// Both fields always come from the same fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRecord {
    /// The cached bang list.
    pub config: BangsConfig,

    /// When the list was fetched.
    pub last_refreshed_at: SystemTime,
}

/// Why no usable record was found in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheMiss {
    /// Nothing stored under `key`.
    NotFound(StoreKey),

    /// Something stored under `key` could not be used.
    Corrupted {
        /// Key holding the bad value.
        key: StoreKey,
        /// What was wrong with it.
        reason: String,
    },
}

impl fmt::Display for CacheMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "no cached {key}"),
            Self::Corrupted { key, reason } => write!(f, "cached {key} is unusable: {reason}"),
        }
    }
}

impl CacheRecord {
    /// Creates a record.
    #[must_use]
    pub const fn new(config: BangsConfig, last_refreshed_at: SystemTime) -> Self {
        Self {
            config,
            last_refreshed_at,
        }
    }

    /// Reads a complete record from the store.
    ///
    /// A missing key, an unreadable file, and a value of the wrong shape
    /// all come back as a [`CacheMiss`].
    ///
    /// # Errors
    ///
    /// Returns [`CacheMiss`] naming the first key that could not be used.
    pub fn load(store: &impl ConfigStore) -> Result<Self, CacheMiss> {
        let config = bangs::from_value(load_key(store, StoreKey::Bangs)?).map_err(|e| {
            CacheMiss::Corrupted {
                key: StoreKey::Bangs,
                reason: e.to_string(),
            }
        })?;

        let millis = load_key(store, StoreKey::LastRefreshed)?
            .as_u64()
            .ok_or_else(|| CacheMiss::Corrupted {
                key: StoreKey::LastRefreshed,
                reason: "expected milliseconds since the Unix epoch".to_string(),
            })?;

        Ok(Self::new(config, from_unix_millis(millis)))
    }

    /// Age of the record at `now` in whole milliseconds.
    ///
    /// Returns `None` if the record claims to be from the future.
    #[must_use]
    pub fn age_millis(&self, now: SystemTime) -> Option<u64> {
        unix_millis(now).checked_sub(unix_millis(self.last_refreshed_at))
    }

    /// Returns `true` if the record is older than `ttl` at `now`.
    ///
    /// A record exactly `ttl` old is still fresh. A record from the
    /// future is fresh.
    #[must_use]
    pub fn is_stale(&self, now: SystemTime, ttl: Duration) -> bool {
        self.age_millis(now)
            .is_some_and(|age| u128::from(age) > ttl.as_millis())
    }

    /// Value persisted under [`StoreKey::LastRefreshed`].
    #[must_use]
    pub fn timestamp_value(&self) -> Value {
        Value::from(unix_millis(self.last_refreshed_at))
    }
}

fn load_key(store: &impl ConfigStore, key: StoreKey) -> Result<Value, CacheMiss> {
    match store.get(key) {
        LoadResult::Loaded(value) => Ok(value),
        LoadResult::NotFound => Err(CacheMiss::NotFound(key)),
        LoadResult::Corrupted { reason } => Err(CacheMiss::Corrupted { key, reason }),
    }
}
