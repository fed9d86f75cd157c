//! Incoming search links.
//!
//! Browsers invoke a custom search engine with a URL such as
//! `https://unbang.link/?q=!w+rust&config=/bangs.json`. This module pulls
//! the raw query and the bang list source out of such a link.

use url::Url;

/// Query parameter carrying the raw query.
pub const QUERY_PARAM: &str = "q";

/// Query parameter carrying the bang list source.
pub const CONFIG_PARAM: &str = "config";

/// The parts of an incoming link that drive a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingLink {
    /// Raw query, empty if `q` is absent.
    pub query: String,

    /// Bang list source, `None` if `config` is absent or empty.
    pub source: Option<Url>,
}

impl IncomingLink {
    /// Extracts the query and source from `link`.
    ///
    /// A relative `config` value is resolved against `link` itself. If it
    /// cannot be resolved the source is treated as absent.
    #[must_use]
    pub fn parse(link: &Url) -> Self {
        let mut query = None;
        let mut config = None;

        for (name, value) in link.query_pairs() {
            match &*name {
                QUERY_PARAM if query.is_none() => query = Some(value.into_owned()),
                CONFIG_PARAM if config.is_none() => config = Some(value.into_owned()),
                _ => {}
            }
        }

        let source = config
            .filter(|c| !c.trim().is_empty())
            .and_then(|c| match link.join(c.trim()) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!("Ignoring unusable config source '{c}': {e}");
                    None
                }
            });

        Self {
            query: query.unwrap_or_default(),
            source,
        }
    }
}
