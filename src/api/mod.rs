//! API Module
//!
//! HTTP handlers and routing for the proxy's REST API.
//!
//! # Endpoints
//! - `GET /api/meals/search?name=...` - Search meals by name
//! - `GET /api/meals/categories` - List all meal categories
//! - `GET /api/meals/random` - Get a random meal
//! - `GET /api/meals/lookup?id=...` - Look a meal up by id
//! - `GET /api/meals/filter?category=...` - Filter meals by category
//! - `GET /stats` - Per-region cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
