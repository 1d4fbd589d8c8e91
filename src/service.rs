//! Meal Service Module
//!
//! Cache-aside facade joining the response cache and the upstream client.
//! Every query consults its region first and only reaches the upstream API
//! on a miss; fetched payloads are memoized verbatim for the next caller.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{Region, ResponseCache};
use crate::error::Result;
use crate::upstream::MealDbClient;

/// Cache key for operations that take no input.
const SENTINEL_KEY: &str = "all";

// == Meal Service ==
/// Query facade over the cache and the upstream client.
#[derive(Debug, Clone)]
pub struct MealService {
    cache: Arc<ResponseCache>,
    upstream: MealDbClient,
}

impl MealService {
    // == Constructor ==
    /// Creates a service over a shared cache and an upstream client.
    pub fn new(cache: Arc<ResponseCache>, upstream: MealDbClient) -> Self {
        Self { cache, upstream }
    }

    // == Search ==
    /// Returns the meals matching `name`, memoized in the `search` region.
    pub async fn search_by_name(&self, name: &str) -> Result<String> {
        self.fetch_with_cache(Region::Search, name, self.upstream.search_by_name(name))
            .await
    }

    // == Categories ==
    /// Returns the category list, memoized under a single fixed key.
    pub async fn list_categories(&self) -> Result<String> {
        self.fetch_with_cache(
            Region::Categories,
            SENTINEL_KEY,
            self.upstream.list_categories(),
        )
        .await
    }

    // == Random ==
    /// Returns a random meal, memoized under a single fixed key.
    ///
    /// Repeated calls within one TTL window return the same meal; a fresh
    /// draw happens only after the entry expires or is evicted.
    pub async fn random_meal(&self) -> Result<String> {
        self.fetch_with_cache(Region::Random, SENTINEL_KEY, self.upstream.random_meal())
            .await
    }

    // == Lookup ==
    /// Returns the meal with id `id`, memoized in the `lookup` region.
    pub async fn lookup_by_id(&self, id: &str) -> Result<String> {
        self.fetch_with_cache(Region::Lookup, id, self.upstream.lookup_by_id(id))
            .await
    }

    // == Filter ==
    /// Returns the meals in `category`, memoized in the `filter` region.
    pub async fn filter_by_category(&self, category: &str) -> Result<String> {
        self.fetch_with_cache(
            Region::Filter,
            category,
            self.upstream.filter_by_category(category),
        )
        .await
    }

    // == Cache-Aside Core ==
    /// Serves `(region, key)` from the cache, falling back to `fetch`.
    ///
    /// `fetch` is an unstarted future, so a hit never touches the upstream.
    /// A fetch error propagates without being stored; the next call for the
    /// same key retries the upstream.
    async fn fetch_with_cache<F>(&self, region: Region, key: &str, fetch: F) -> Result<String>
    where
        F: Future<Output = Result<String>>,
    {
        if let Some(cached) = self.cache.get(region, key).await {
            debug!(%region, key, "cache hit");
            return Ok(cached);
        }

        debug!(%region, key, "cache miss, fetching upstream");
        let payload = match fetch.await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%region, key, error = %err, "upstream fetch failed");
                return Err(err);
            }
        };
        self.cache.put(region, key, payload.clone()).await;

        Ok(payload)
    }
}
