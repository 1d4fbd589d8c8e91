//! Request DTOs for the proxy API
//!
//! Defines the query strings accepted by the meal endpoints. Parameters
//! arrive optional and are promoted to required values during validation,
//! so a missing or blank parameter surfaces as a client error instead of a
//! deserialization failure.

use serde::Deserialize;

use crate::error::{ProxyError, Result};

/// Query string for GET /api/meals/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Meal name to search for
    pub name: Option<String>,
}

impl SearchParams {
    /// Returns the trimmed search name, or an error when absent or blank.
    pub fn name(&self) -> Result<&str> {
        require_param(self.name.as_deref(), "name")
    }
}

/// Query string for GET /api/meals/lookup
#[derive(Debug, Clone, Deserialize)]
pub struct LookupParams {
    /// Meal id to look up
    pub id: Option<String>,
}

impl LookupParams {
    /// Returns the trimmed meal id, or an error when absent or blank.
    pub fn id(&self) -> Result<&str> {
        require_param(self.id.as_deref(), "id")
    }
}

/// Query string for GET /api/meals/filter
#[derive(Debug, Clone, Deserialize)]
pub struct FilterParams {
    /// Category name to filter by
    pub category: Option<String>,
}

impl FilterParams {
    /// Returns the trimmed category, or an error when absent or blank.
    pub fn category(&self) -> Result<&str> {
        require_param(self.category.as_deref(), "category")
    }
}

/// Trims `value` and rejects absent or whitespace-only parameters.
fn require_param<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(ProxyError::MissingParam(name)),
    }
}
