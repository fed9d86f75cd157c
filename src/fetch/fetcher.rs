//! Bang list fetching trait and HTTP implementation.

use url::Url;

use crate::bangs::{self, BangsConfig};

use super::{FetchError, HttpClient, HttpRequest};

/// Trait for retrieving a bang list from a remote source.
///
/// Implementations make exactly one attempt per call; retry policy, if any,
/// belongs to the caller.
pub trait ConfigFetcher: Send + Sync {
    /// Fetches and validates the bang list at `source`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the source cannot be reached, answers
    /// with a non-success status, or returns something other than a
    /// JSON array of bangs.
    fn fetch(
        &self,
        source: &Url,
    ) -> impl std::future::Future<Output = Result<BangsConfig, FetchError>> + Send;
}

/// HTTP-based bang list fetcher.
///
/// Issues a single [`HttpRequest::get_json`] and validates
/// the body with [`bangs::parse_config`].
#[derive(Debug, Clone)]
pub struct HttpConfigFetcher<C> {
    client: C,
}

impl<C: HttpClient> HttpConfigFetcher<C> {
    /// Creates a fetcher backed by the given HTTP client.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }
}

impl<C: HttpClient> ConfigFetcher for HttpConfigFetcher<C> {
    async fn fetch(&self, source: &Url) -> Result<BangsConfig, FetchError> {
        tracing::info!("Fetching bangs from {source}");

        let response = self
            .client
            .request(HttpRequest::get_json(source.clone()))
            .await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let config = bangs::parse_config(&response.body)?;
        tracing::debug!("Fetched {} bang(s) from {source}", config.len());
        Ok(config)
    }
}
