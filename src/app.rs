//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and hints
//! that support the main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use unbang::config::ConfigError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, unreadable config file, bad link.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - bang list could not be fetched.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// No redirect (exit code 3) - empty query, no matching bang, or no source.
    pub fn no_redirect() -> ExitCode {
        ExitCode::from(3)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'unbang init' to generate a configuration template.");
        }
        ConfigError::InvalidUrl { .. } => {
            eprintln!("\nThe bang list source must be an absolute URL, e.g. https://example.com/bangs.json");
        }
        _ => {}
    }
}

/// Prints the usage hint shown when no bang list source is known.
pub fn print_usage_hint() {
    eprintln!(
        "No bang list source configured.\n\
         Pass --source <URL>, set [source] url in a config file, \
         or use --link with a `config` parameter."
    );
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the redirect URL.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
