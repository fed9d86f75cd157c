//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// unbang: fast bang redirects
///
/// Resolves queries like "!w rust" to a search engine URL using a locally
/// cached bang list, and prints the URL.
#[derive(Debug, Parser)]
#[command(name = "unbang")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Query to resolve (words are joined with single spaces)
    ///
    /// Everything from the first query word on is query text, including
    /// words that start with `-`.
    #[arg(value_name = "QUERY", trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,

    /// Incoming search link carrying `q` and `config` parameters
    #[arg(long, value_name = "URL", conflicts_with = "query")]
    pub link: Option<String>,

    /// URL of the bang list (JSON array of {"t", "u"} objects)
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Bang used when the query has none, or an unknown one
    #[arg(long = "default-bang", value_name = "BANG", global = true)]
    pub default_bang: Option<String>,

    /// Directory holding the cached bang list
    #[arg(long = "cache-dir", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Cache freshness window in seconds
    #[arg(long, value_name = "SECS", global = true)]
    pub ttl: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for unbang
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "unbang.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the positional query words joined with single spaces.
    #[must_use]
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}
