//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint. Meal handlers validate
//! their query string, delegate to the cache-aside service and relay the
//! upstream payload untouched.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use crate::cache::{Region, ResponseCache};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    FilterParams, HealthResponse, LookupParams, RawJson, RegionStats, SearchParams, StatsResponse,
};
use crate::service::MealService;
use crate::upstream::MealDbClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache, exposed for the stats endpoint
    pub cache: Arc<ResponseCache>,
    /// Cache-aside query facade
    pub meals: MealService,
}

impl AppState {
    /// Creates a new AppState over a shared cache and an upstream client.
    pub fn new(cache: Arc<ResponseCache>, upstream: MealDbClient) -> Self {
        let meals = MealService::new(Arc::clone(&cache), upstream);
        Self { cache, meals }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the upstream client and the region cache from Config values.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let upstream = MealDbClient::new(&config.upstream_base_url, config.upstream_timeout())?;
        let cache = Arc::new(ResponseCache::new(
            config.cache_max_entries,
            config.cache_ttl(),
        ));
        Ok(Self::new(cache, upstream))
    }
}

/// Handler for GET /api/meals/search?name=...
///
/// Searches meals by name. A missing or blank `name` is a client error.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<RawJson> {
    let name = params.name()?;
    let payload = state.meals.search_by_name(name).await?;

    Ok(RawJson(payload))
}

/// Handler for GET /api/meals/categories
///
/// Lists all meal categories.
pub async fn categories_handler(State(state): State<AppState>) -> Result<RawJson> {
    let payload = state.meals.list_categories().await?;

    Ok(RawJson(payload))
}

/// Handler for GET /api/meals/random
///
/// Returns a random meal. Served from cache within the TTL window, so
/// repeated calls see the same meal until the entry expires.
pub async fn random_handler(State(state): State<AppState>) -> Result<RawJson> {
    let payload = state.meals.random_meal().await?;

    Ok(RawJson(payload))
}

/// Handler for GET /api/meals/lookup?id=...
///
/// Looks a meal up by id. A missing or blank `id` is a client error.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<RawJson> {
    let id = params.id()?;
    let payload = state.meals.lookup_by_id(id).await?;

    Ok(RawJson(payload))
}

/// Handler for GET /api/meals/filter?category=...
///
/// Filters meals by category. A missing or blank `category` is a client error.
pub async fn filter_handler(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<RawJson> {
    let category = params.category()?;
    let payload = state.meals.filter_by_category(category).await?;

    Ok(RawJson(payload))
}

/// Handler for GET /stats
///
/// Returns per-region cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let mut regions = BTreeMap::new();
    for region in Region::ALL {
        let stats = state.cache.stats(region).await;
        regions.insert(region.name(), RegionStats::from(stats));
    }

    Json(StatsResponse::new(regions))
}

/// Handler for GET /health
///
/// Returns health status of the proxy.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
