//! Cache Entry Module
//!
//! Defines the structure for individual cached upstream payloads.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached upstream payload with its insertion and expiry times.
///
/// Every entry carries the same fixed TTL, applied by the owning region at
/// insertion. Expiry is evaluated lazily at read time; the entry may outlive
/// its TTL physically until a read or the background sweep removes it, but it
/// is never returned once expired.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, opaque JSON text from the upstream API
    pub value: String,
    /// Insertion timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` after now.
    pub fn new(value: String, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            created_at: now,
            expires_at: now + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time, so a payload is
    /// unreadable the instant its TTL has fully elapsed.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
