//! MealDB Proxy - A caching HTTP facade for TheMealDB recipe API
//!
//! Forwards meal queries to the public API and memoizes every successful
//! response in a bounded, TTL-bound in-memory cache with one region per
//! query type.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use service::MealService;
pub use tasks::spawn_cleanup_task;
pub use upstream::MealDbClient;
