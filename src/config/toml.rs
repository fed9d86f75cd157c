//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Bang list source section
    #[serde(default)]
    pub source: SourceSection,

    /// User preferences section
    #[serde(default)]
    pub preferences: PreferencesSection,

    /// Local cache section
    #[serde(default)]
    pub cache: CacheSection,
}

/// Bang list source section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    /// URL of the bang list
    pub url: Option<String>,
}

/// User preferences section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferencesSection {
    /// Bang used when the query has none
    pub default_bang: Option<String>,
}

/// Local cache section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheSection {
    /// Cache directory (`~` expands to the home directory)
    pub dir: Option<String>,

    /// Freshness window in seconds
    pub ttl: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# unbang configuration file

[source]
# URL of the bang list: a JSON array of {"t": trigger, "u": url template}
# objects, where "{{{s}}}" in the template is replaced by the query.
# Can be overridden with --source or the `config` parameter of --link.
# url = "https://duckduckgo.com/bang.js"

[preferences]
# Bang used when a query has no bang, or one that is not in the list
default_bang = "g"

[cache]
# Directory holding the cached bang list (default: platform cache dir)
# dir = "~/.cache/unbang"

# Seconds before the cached list is considered stale (default: 600)
ttl = 600
"#
    .to_string()
}
