//! Application execution logic.
//!
//! This module turns the command line into one [`Invocation`] and runs it
//! through a [`Session`] backed by the on-disk cache and the network.

use thiserror::Error;
use url::Url;

use unbang::config::{Cli, ValidatedConfig};
use unbang::fetch::{FetchError, HttpConfigFetcher, ReqwestClient};
use unbang::link::IncomingLink;
use unbang::resolve::{NoRedirectReason, Resolution};
use unbang::session::Session;
use unbang::store::FileConfigStore;
use unbang::time::SystemClock;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The `--link` argument is not a URL.
    #[error("Invalid link '{link}': {source}")]
    InvalidLink {
        /// The link as given
        link: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The bang list was stale or missing and could not be fetched.
    #[error("Failed to refresh bang list: {0}")]
    Refresh(#[from] FetchError),
}

/// Query and source for a single run.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Raw query, untrimmed
    pub query: String,

    /// Bang list source, if any is known
    pub source: Option<Url>,
}

impl Invocation {
    /// Builds the invocation from CLI input and the validated config.
    ///
    /// With `--link`, the link's `q` is the query and its `config`
    /// parameter, when present, replaces the configured source.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::InvalidLink`] if `--link` is not an absolute URL.
    pub fn from_cli(cli: &Cli, config: &ValidatedConfig) -> Result<Self, RunError> {
        let Some(ref raw) = cli.link else {
            return Ok(Self {
                query: cli.query_text(),
                source: config.source.clone(),
            });
        };

        let url = Url::parse(raw).map_err(|source| RunError::InvalidLink {
            link: raw.clone(),
            source,
        })?;
        let link = IncomingLink::parse(&url);

        Ok(Self {
            query: link.query,
            source: link.source.or_else(|| config.source.clone()),
        })
    }
}

/// What a run produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Redirect target to print.
    Redirect(String),
    /// The query resolved to nothing.
    NoRedirect(NoRedirectReason),
    /// No bang list source was configured.
    NoSource,
}

impl From<Resolution> for Outcome {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Redirect(url) => Self::Redirect(url),
            Resolution::NoRedirect(reason) => Self::NoRedirect(reason),
        }
    }
}

/// Executes one redirect.
///
/// # Errors
///
/// Returns [`RunError::Refresh`] if the cache needed refreshing and the
/// bang list could not be fetched.
pub async fn execute(config: &ValidatedConfig, invocation: Invocation) -> Result<Outcome, RunError> {
    let Some(source) = invocation.source else {
        tracing::debug!("No bang list source, skipping redirect");
        return Ok(Outcome::NoSource);
    };

    let session = create_session(config);
    tracing::debug!("Using bang list from {source}");

    let resolution = session.redirect(&source, &invocation.query).await?;
    Ok(resolution.into())
}

/// Session type used by the binary.
type AppSession = Session<FileConfigStore, HttpConfigFetcher<ReqwestClient>, SystemClock>;

/// Creates the session from configuration.
fn create_session(config: &ValidatedConfig) -> AppSession {
    let store = FileConfigStore::new(&config.cache_dir);
    let fetcher = HttpConfigFetcher::new(ReqwestClient::new());

    Session::new(store, fetcher, SystemClock, config.default_bang.clone()).with_ttl(config.ttl)
}
