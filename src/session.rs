//! Redirect session: the explicit context for one resolve pipeline.
//!
//! A [`Session`] bundles the store, fetcher, clock and default bang that
//! a redirect needs, and runs refresh → resolve in that order.

use std::time::Duration;

use url::Url;

use crate::cache::CacheRefresher;
use crate::fetch::{ConfigFetcher, FetchError};
use crate::resolve::{Resolution, resolve};
use crate::store::ConfigStore;
use crate::time::Clock;

/// Context for resolving queries against a cached bang list.
#[derive(Debug)]
pub struct Session<S, F, C> {
    refresher: CacheRefresher<S, F, C>,
    default_trigger: String,
}

impl<S, F, C> Session<S, F, C>
where
    S: ConfigStore,
    F: ConfigFetcher,
    C: Clock,
{
    /// Creates a session with the default TTL.
    #[must_use]
    pub fn new(store: S, fetcher: F, clock: C, default_trigger: impl Into<String>) -> Self {
        Self {
            refresher: CacheRefresher::new(store, fetcher, clock),
            default_trigger: default_trigger.into(),
        }
    }

    /// Sets the cache freshness window.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.refresher = self.refresher.with_ttl(ttl);
        self
    }

    /// Returns the default trigger used when a query has no known bang.
    #[must_use]
    pub fn default_trigger(&self) -> &str {
        &self.default_trigger
    }

    /// Returns the underlying refresher.
    #[must_use]
    pub const fn refresher(&self) -> &CacheRefresher<S, F, C> {
        &self.refresher
    }

    /// Refreshes the bang list from `source` if needed, then resolves `raw_query`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the cache was stale and the fetch failed.
    /// No stale list is used in that case.
    pub async fn redirect(&self, source: &Url, raw_query: &str) -> Result<Resolution, FetchError> {
        let config = self.refresher.refresh(source).await?;
        let resolution = resolve(raw_query, &config, &self.default_trigger);

        match &resolution {
            Resolution::Redirect(url) => tracing::info!("Redirecting to {url}"),
            Resolution::NoRedirect(reason) => tracing::info!("No redirect: {reason}"),
        }

        Ok(resolution)
    }
}
