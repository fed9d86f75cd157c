//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::path::PathBuf;
use std::time::Duration;

/// Default bang used when a query has none, or an unknown one.
pub const DEFAULT_BANG: &str = "g";

/// Default cache freshness window in seconds.
pub const TTL_SECS: u64 = 600;

/// Directory name used under the platform cache directory.
pub const CACHE_DIR_NAME: &str = "unbang";

/// Cache directory used when the platform has no cache directory.
pub const FALLBACK_CACHE_DIR: &str = ".unbang-cache";

/// Default cache freshness window as Duration.
#[must_use]
pub const fn ttl() -> Duration {
    Duration::from_secs(TTL_SECS)
}

/// Default cache directory (`<platform cache dir>/unbang`).
#[must_use]
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir().map_or_else(
        || PathBuf::from(FALLBACK_CACHE_DIR),
        |dir| dir.join(CACHE_DIR_NAME),
    )
}
