//! Bang data model.
//!
//! This module provides types for:
//! - A single trigger → URL template mapping ([`BangEntry`])
//! - The ordered list of mappings ([`BangsConfig`])
//! - Validating raw JSON into a typed list ([`parse_config`], [`FormatError`])

mod schema;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
#[cfg(test)]
mod schema_tests;

pub use schema::{FormatError, from_value, parse_config};

use serde::{Deserialize, Serialize};

/// Literal token in a URL template that is replaced by the encoded query.
pub const PLACEHOLDER: &str = "{{{s}}}";

/// A single bang: a trigger token and the URL template it expands to.
///
/// Serialized with the short field names used by public bang lists
/// (`t` for the trigger, `u` for the template). Any other fields in a
/// remote entry are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BangEntry {
    /// Trigger token without the leading `!`.
    #[serde(rename = "t")]
    pub trigger: String,

    /// URL template containing [`PLACEHOLDER`].
    #[serde(rename = "u")]
    pub url_template: String,
}

impl BangEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(trigger: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            url_template: url_template.into(),
        }
    }

    /// Returns `true` if this entry's trigger equals `trigger`, ignoring case.
    #[must_use]
    pub fn matches(&self, trigger: &str) -> bool {
        self.trigger == trigger || self.matches_lowercase(&trigger.to_lowercase())
    }

    /// Compares against an already lowercased trigger without allocating.
    fn matches_lowercase(&self, lowercase: &str) -> bool {
        self.trigger
            .chars()
            .flat_map(char::to_lowercase)
            .eq(lowercase.chars())
    }

    /// Expands the template by substituting the first placeholder.
    ///
    /// `encoded_query` is inserted verbatim; callers are responsible for
    /// encoding it. A template without a placeholder is returned unchanged.
    #[must_use]
    pub fn expand(&self, encoded_query: &str) -> String {
        self.url_template.replacen(PLACEHOLDER, encoded_query, 1)
    }
}

/// Ordered list of bangs.
///
/// Duplicate triggers are kept; lookups return the first match in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BangsConfig {
    entries: Vec<BangEntry>,
}

impl BangsConfig {
    /// Creates a config from the given entries, preserving order.
    #[must_use]
    pub const fn new(entries: Vec<BangEntry>) -> Self {
        Self { entries }
    }

    /// Returns the first entry whose trigger matches, ignoring case.
    #[must_use]
    pub fn find(&self, trigger: &str) -> Option<&BangEntry> {
        let wanted = trigger.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.matches_lowercase(&wanted))
    }

    /// Returns the entries in order.
    #[must_use]
    pub fn entries(&self) -> &[BangEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the config has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<BangEntry>> for BangsConfig {
    fn from(entries: Vec<BangEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<BangEntry> for BangsConfig {
    fn from_iter<I: IntoIterator<Item = BangEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
