//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies. Meal payloads stay
//! untyped: the proxy relays whatever JSON the upstream returned.

use std::collections::BTreeMap;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::cache::CacheStats;

/// An upstream JSON payload relayed byte-for-byte.
///
/// The body is never parsed or re-serialized, so field order, formatting and
/// any upstream quirks survive the round trip through the cache.
#[derive(Debug, Clone)]
pub struct RawJson(pub String);

impl IntoResponse for RawJson {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "application/json")], self.0).into_response()
    }
}

/// Statistics for one cache region (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct RegionStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Number of TTL expirations
    pub expirations: u64,
    /// Current number of entries in the region
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for RegionStats {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
///
/// Regions are keyed by name; BTreeMap keeps the JSON ordering stable.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Per-region statistics
    pub regions: BTreeMap<&'static str, RegionStats>,
}

impl StatsResponse {
    /// Creates a new StatsResponse from collected region statistics.
    pub fn new(regions: BTreeMap<&'static str, RegionStats>) -> Self {
        Self { regions }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
