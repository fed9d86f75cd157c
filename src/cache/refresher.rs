//! Refresh policy for the cached bang list.

use std::time::Duration;

use url::Url;

use crate::bangs::BangsConfig;
use crate::fetch::{ConfigFetcher, FetchError};
use crate::store::{ConfigStore, StoreKey};
use crate::time::Clock;

use super::{CacheMiss, CacheRecord, DEFAULT_TTL};

/// Returns a usable bang list, re-fetching only when the cache is stale.
///
/// # Policy
///
/// 1. Read the [`CacheRecord`]; any read problem counts as a miss.
/// 2. Fresh record: return its config without touching the network.
/// 3. Stale record or miss: fetch once. On success persist the config,
///    then the timestamp, and return the new config.
/// 4. Fetch failure: return the error. A stale record is never served.
///
/// Store write failures are logged and otherwise ignored; the next call
/// will simply fetch again.
#[derive(Debug)]
pub struct CacheRefresher<S, F, C> {
    store: S,
    fetcher: F,
    clock: C,
    ttl: Duration,
}

impl<S, F, C> CacheRefresher<S, F, C>
where
    S: ConfigStore,
    F: ConfigFetcher,
    C: Clock,
{
    /// Creates a refresher with the default TTL.
    #[must_use]
    pub const fn new(store: S, fetcher: F, clock: C) -> Self {
        Self {
            store,
            fetcher,
            clock,
            ttl: DEFAULT_TTL,
        }
    }

    /// Sets the freshness window.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the freshness window.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying fetcher.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Returns the bang list, fetching from `source` if the cache is stale.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if a fetch was needed and failed.
    pub async fn refresh(&self, source: &Url) -> Result<BangsConfig, FetchError> {
        let now = self.clock.now();

        match CacheRecord::load(&self.store) {
            Ok(record) if !record.is_stale(now, self.ttl) => {
                tracing::debug!(
                    "Using cached bangs ({} entries, age {}ms)",
                    record.config.len(),
                    record.age_millis(now).unwrap_or_default()
                );
                return Ok(record.config);
            }
            Ok(record) => {
                tracing::info!(
                    "Cached bangs are stale (age {}ms > ttl {}ms), refreshing",
                    record.age_millis(now).unwrap_or_default(),
                    self.ttl.as_millis()
                );
            }
            Err(miss @ CacheMiss::NotFound(_)) => {
                tracing::info!("Bang cache miss ({miss}), fetching");
            }
            Err(miss @ CacheMiss::Corrupted { .. }) => {
                tracing::warn!("Bang cache miss ({miss}), fetching");
            }
        }

        let config = self.fetcher.fetch(source).await.inspect_err(|e| {
            tracing::error!("Failed to refresh bangs from {source}: {e}");
        })?;

        self.persist(&CacheRecord::new(config.clone(), now)).await;
        Ok(config)
    }

    /// Writes `record` to the store, config first.
    ///
    /// If the config write fails the timestamp is left untouched, so the
    /// store never claims freshness for data it does not hold.
    async fn persist(&self, record: &CacheRecord) {
        let bangs = match serde_json::to_value(&record.config) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to serialize bangs for caching: {e}");
                return;
            }
        };

        if let Err(e) = self.store.put(StoreKey::Bangs, &bangs).await {
            tracing::warn!("Failed to cache bangs, next run will refetch: {e}");
            return;
        }

        let timestamp = record.timestamp_value();
        if let Err(e) = self.store.put(StoreKey::LastRefreshed, &timestamp).await {
            tracing::warn!("Failed to cache refresh time, next run will refetch: {e}");
            return;
        }

        tracing::debug!(
            "Cached {} bang(s) at {}ms",
            record.config.len(),
            timestamp
        );
    }
}
