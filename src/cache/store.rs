//! Cache Store Module
//!
//! Bounded, expiring payload storage partitioned into independent regions.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheStats, Region, WriteOrder};

// == Region Store ==
/// Storage for a single cache region.
///
/// Combines HashMap storage with write-order tracking for capacity eviction
/// and lazy TTL expiration. Absence of a value is an ordinary outcome, not an
/// error: callers fall through to the upstream fetch.
#[derive(Debug)]
pub struct RegionStore {
    /// Key-payload storage
    entries: HashMap<String, CacheEntry>,
    /// Write recency, oldest first
    order: WriteOrder,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of live entries
    max_entries: usize,
    /// TTL applied to every entry
    ttl: Duration,
}

impl RegionStore {
    // == Constructor ==
    /// Creates an empty region with the given capacity and entry TTL.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: WriteOrder::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl,
        }
    }

    // == Get ==
    /// Returns the payload stored under `key` if present and unexpired.
    ///
    /// An entry past its TTL is treated as absent and dropped on the spot,
    /// counting as both a miss and an expiration. Reads never refresh write
    /// recency, so a hot key still ages toward eviction once the region fills
    /// with younger writes.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.order.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Put ==
    /// Inserts or overwrites the payload stored under `key`.
    ///
    /// If the region is at capacity and the key is new, the least recently
    /// written entry is evicted first. An overwrite refreshes the key's write
    /// recency and restarts its TTL. A zero capacity disables storage.
    pub fn put(&mut self, key: &str, value: String) {
        if self.max_entries == 0 {
            return;
        }

        let is_overwrite = self.entries.contains_key(key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.order.pop_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        let entry = CacheEntry::new(value, self.ttl);
        self.entries.insert(key.to_string(), entry);
        self.order.record(key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the region.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in &expired_keys {
            self.entries.remove(key);
            self.order.remove(key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current region statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the region holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Response Cache ==
/// The process-wide response cache: one [`RegionStore`] per [`Region`].
///
/// Every region has its own lock, so operations on different regions never
/// contend. Within a region, each get/put runs as one read-modify-write
/// sequence under the guard; the guard is never held across an upstream
/// await, which keeps concurrent misses for the same key possible (both fetch,
/// the later write wins harmlessly).
#[derive(Debug)]
pub struct ResponseCache {
    stores: [RwLock<RegionStore>; Region::ALL.len()],
}

impl ResponseCache {
    // == Constructor ==
    /// Creates the fixed region set sharing one capacity and TTL.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            stores: Region::ALL.map(|_| RwLock::new(RegionStore::new(max_entries, ttl))),
        }
    }

    fn store(&self, region: Region) -> &RwLock<RegionStore> {
        &self.stores[region.index()]
    }

    // == Get ==
    /// Returns the payload cached under `(region, key)` if present and fresh.
    pub async fn get(&self, region: Region, key: &str) -> Option<String> {
        self.store(region).write().await.get(key)
    }

    // == Put ==
    /// Stores `value` under `(region, key)`, evicting at capacity.
    pub async fn put(&self, region: Region, key: &str, value: String) {
        self.store(region).write().await.put(key, value);
    }

    // == Stats ==
    /// Snapshot of one region's statistics.
    pub async fn stats(&self, region: Region) -> CacheStats {
        self.store(region).read().await.stats()
    }

    // == Length ==
    /// Number of live entries in one region.
    pub async fn len(&self, region: Region) -> usize {
        self.store(region).read().await.len()
    }

    // == Cleanup Expired ==
    /// Sweeps expired entries from every region, one region at a time.
    ///
    /// Returns the total number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut removed = 0;
        for region in Region::ALL {
            removed += self.store(region).write().await.cleanup_expired();
        }
        removed
    }
}
