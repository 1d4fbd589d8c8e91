//! Upstream Client Module
//!
//! Thin HTTP client for the remote recipe API. One method per upstream
//! endpoint; every method returns the raw response body untouched.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{ProxyError, Result};

// == MealDB Client ==
/// HTTP client for the upstream recipe API.
///
/// Holds a connection-pooling [`reqwest::Client`] and the API base URL. The
/// base URL is injectable so tests can point the client at a local mock
/// server.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
}

impl MealDbClient {
    // == Constructor ==
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - API root; a trailing slash is tolerated
    /// * `timeout` - Deadline applied to every upstream request
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    // == Search ==
    /// Fetches the meals whose name matches `name`.
    pub async fn search_by_name(&self, name: &str) -> Result<String> {
        self.get_text("search.php", &[("s", name)]).await
    }

    // == Categories ==
    /// Fetches the full list of meal categories.
    pub async fn list_categories(&self) -> Result<String> {
        self.get_text("categories.php", &[]).await
    }

    // == Random ==
    /// Fetches a single random meal.
    pub async fn random_meal(&self) -> Result<String> {
        self.get_text("random.php", &[]).await
    }

    // == Lookup ==
    /// Fetches the meal with id `id`.
    pub async fn lookup_by_id(&self, id: &str) -> Result<String> {
        self.get_text("lookup.php", &[("i", id)]).await
    }

    // == Filter ==
    /// Fetches the meals belonging to `category`.
    pub async fn filter_by_category(&self, category: &str) -> Result<String> {
        self.get_text("filter.php", &[("c", category)]).await
    }

    // == Request Helper ==
    /// Issues one GET against the upstream API and returns the body verbatim.
    ///
    /// A non-success status becomes [`ProxyError::UpstreamStatus`]; transport
    /// and timeout failures convert through `From<reqwest::Error>`.
    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "requesting upstream");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(status));
        }

        Ok(response.text().await?)
    }
}
