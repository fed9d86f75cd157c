//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Bang list source; `None` means no redirect unless a link supplies one.
    pub source: Option<Url>,

    /// Default bang, without the leading `!`
    pub default_bang: String,

    /// Directory holding the cached bang list
    pub cache_dir: PathBuf,

    /// Cache freshness window
    pub ttl: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source_str = self
            .source
            .as_ref()
            .map_or_else(|| "none".to_string(), Url::to_string);

        write!(
            f,
            "Config {{ source: {}, default_bang: !{}, cache_dir: {}, ttl: {}s }}",
            source_str,
            self.default_bang,
            self.cache_dir.display(),
            self.ttl.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source URL is not an absolute URL
    /// - The default bang is empty or contains whitespace
    /// - The TTL is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let source = Self::resolve_source(cli, toml)?;
        let default_bang = Self::resolve_default_bang(cli, toml)?;
        let cache_dir = Self::resolve_cache_dir(cli, toml);
        let ttl = Self::resolve_ttl(cli, toml)?;

        Ok(Self {
            source,
            default_bang,
            cache_dir,
            ttl,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_source(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<Url>, ConfigError> {
        // CLI takes precedence
        let Some(url_str) = cli
            .source
            .as_deref()
            .or_else(|| toml.and_then(|t| t.source.url.as_deref()))
        else {
            return Ok(None);
        };

        parse_url(url_str).map(Some)
    }

    fn resolve_default_bang(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let raw = cli
            .default_bang
            .as_deref()
            .or_else(|| toml.and_then(|t| t.preferences.default_bang.as_deref()))
            .unwrap_or(defaults::DEFAULT_BANG);

        normalize_bang(raw)
    }

    fn resolve_cache_dir(cli: &Cli, toml: Option<&TomlConfig>) -> PathBuf {
        if let Some(ref dir) = cli.cache_dir {
            return dir.clone();
        }

        toml.and_then(|t| t.cache.dir.as_deref())
            .map_or_else(defaults::cache_dir, expand_tilde)
    }

    fn resolve_ttl(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .ttl
            .or_else(|| toml.and_then(|t| t.cache.ttl))
            .unwrap_or(defaults::TTL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "ttl",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_url(s: &str) -> Result<Url, ConfigError> {
    Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
        url: s.to_string(),
        reason: e.to_string(),
    })
}

fn normalize_bang(raw: &str) -> Result<String, ConfigError> {
    let bang = raw.trim();
    let bang = bang.strip_prefix('!').unwrap_or(bang);

    if bang.is_empty() {
        return Err(ConfigError::InvalidDefaultBang {
            value: raw.to_string(),
            reason: "must not be empty",
        });
    }

    if bang.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidDefaultBang {
            value: raw.to_string(),
            reason: "must not contain whitespace",
        });
    }

    Ok(bang.to_string())
}

fn expand_tilde(path: &str) -> PathBuf {
    let home = || dirs::home_dir().unwrap_or_default();

    if path == "~" {
        return home();
    }

    match path.strip_prefix("~/") {
        Some(rest) => home().join(rest),
        None => PathBuf::from(path),
    }
}
