//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default base URL of the upstream recipe API.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The cache region set itself is fixed at compile time and is not configurable.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream recipe API
    pub upstream_base_url: String,
    /// Request timeout for upstream calls, in seconds
    pub upstream_timeout_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// TTL applied to every cache entry, in seconds
    pub cache_ttl_secs: u64,
    /// Maximum number of live entries per cache region
    pub cache_max_entries: usize,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `UPSTREAM_BASE_URL` - Upstream API root (default: TheMealDB v1 API)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_TTL_SECS` - Entry expiry in seconds (default: 600)
    /// - `CACHE_MAX_ENTRIES` - Capacity per region (default: 500)
    /// - `CLEANUP_INTERVAL_SECS` - Expiry sweep frequency (default: 60)
    pub fn from_env() -> Self {
        Self {
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            cleanup_interval_secs: env::var("CLEANUP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Entry TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Upstream request timeout as a [`Duration`].
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            upstream_timeout_secs: 10,
            server_port: 8080,
            cache_ttl_secs: 600,
            cache_max_entries: 500,
            cleanup_interval_secs: 60,
        }
    }
}
