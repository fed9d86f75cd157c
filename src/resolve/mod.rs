//! Query → redirect resolution.
//!
//! [`resolve`] turns a raw query such as `"!w rust/lang"` into the URL of
//! the selected search engine, or a [`NoRedirectReason`] when nothing can
//! be selected. It is pure: the same inputs always give the same output.

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::fmt;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

use crate::bangs::{BangEntry, BangsConfig};

/// A `!` followed by one or more non-whitespace characters, plus any
/// whitespace after it.
static BANG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!(\S+)\s*").expect("bang pattern is a valid regex"));

/// Outcome of resolving a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Redirect to this URL.
    Redirect(String),
    /// No redirect; the caller should show its fallback.
    NoRedirect(NoRedirectReason),
}

impl Resolution {
    /// Returns the redirect target, if any.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Self::Redirect(url) => Some(url),
            Self::NoRedirect(_) => None,
        }
    }
}

/// Why a query produced no redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoRedirectReason {
    /// The query was empty or whitespace.
    EmptyQuery,
    /// Neither the query's bang nor the default bang is in the list.
    NoMatch,
}

impl fmt::Display for NoRedirectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => f.write_str("empty query"),
            Self::NoMatch => f.write_str("no matching bang"),
        }
    }
}

/// Resolves `raw_query` against `config`.
///
/// The first `!trigger` in the query selects an entry. If the query has no
/// bang, or its bang is unknown, the entry for `default_trigger` is used.
/// The bang and the whitespace after it are removed, the rest is
/// percent-encoded (leaving `/` readable) and substituted into the
/// entry's template.
///
/// # Example
///
/// ```
/// use unbang::bangs::{BangEntry, BangsConfig};
/// use unbang::resolve::{resolve, Resolution};
///
/// let config = BangsConfig::new(vec![
///     BangEntry::new("g", "https://example.com/search?q={{{s}}}"),
/// ]);
///
/// assert_eq!(
///     resolve("!g hello world", &config, "g"),
///     Resolution::Redirect("https://example.com/search?q=hello%20world".into()),
/// );
/// ```
#[must_use]
pub fn resolve(raw_query: &str, config: &BangsConfig, default_trigger: &str) -> Resolution {
    let query = raw_query.trim();
    if query.is_empty() {
        return Resolution::NoRedirect(NoRedirectReason::EmptyQuery);
    }

    let bang = BANG_PATTERN.captures(query);

    let explicit = bang
        .as_ref()
        .and_then(|caps| caps.get(1))
        .and_then(|trigger| config.find(trigger.as_str()));

    let Some(entry) = explicit.or_else(|| config.find(default_trigger)) else {
        return Resolution::NoRedirect(NoRedirectReason::NoMatch);
    };

    let residual = match bang.as_ref().and_then(|caps| caps.get(0)) {
        Some(span) => format!("{}{}", &query[..span.start()], &query[span.end()..]),
        None => query.to_string(),
    };

    Resolution::Redirect(expand(entry, residual.trim()))
}

fn expand(entry: &BangEntry, residual: &str) -> String {
    entry.expand(&encode_query(residual))
}

/// Bytes escaped in a query: everything `encodeURIComponent` escapes,
/// except `/`.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'/');

/// Percent-encodes `query` for use in a URL, keeping `/` literal.
#[must_use]
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ESCAPE).to_string()
}
