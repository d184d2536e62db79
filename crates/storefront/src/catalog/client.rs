//! Catalog service client implementation.
//!
//! Plain JSON over `reqwest`, with `moka` caching of the coffee list.
//! One request per view in practice: the list is fetched once and served
//! from cache until the TTL expires. No retry or backoff - a failed fetch
//! surfaces to the caller.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use coffee_delivery_core::{Coffee, CoffeeId, catalog};

use crate::config::CatalogConfig;

use super::CatalogError;
use super::cache::CacheValue;
use super::conversions::convert_coffee;
use super::types::CoffeeData;

/// Cache key for the full coffee list.
const COFFEES_CACHE_KEY: &str = "coffees";

/// Client for the catalog service.
///
/// Provides typed access to the coffee catalog. The list is cached for the
/// configured TTL and sorted by title once per fetch.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog service client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                api_token: config
                    .api_token
                    .as_ref()
                    .map(|token| token.expose_secret().to_string()),
                cache,
            }),
        }
    }

    /// Fetch the coffee list from the catalog service.
    async fn fetch_coffees(&self) -> Result<Vec<Coffee>, CatalogError> {
        let url = format!("{}/coffees", self.inner.base_url);

        let mut request = self.inner.client.get(&url);
        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "catalog service returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        let data: Vec<CoffeeData> = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "failed to parse catalog response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        let mut coffees = data
            .into_iter()
            .map(convert_coffee)
            .collect::<Result<Vec<_>, _>>()?;

        // Sorted once on load; every consumer sees the same ordering.
        catalog::sort_by_title(&mut coffees);

        Ok(coffees)
    }

    /// Get the full coffee list, sorted by title.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog request fails or the payload is
    /// malformed.
    #[instrument(skip(self))]
    pub async fn get_coffees(&self) -> Result<Vec<Coffee>, CatalogError> {
        if let Some(CacheValue::Coffees(coffees)) =
            self.inner.cache.get(COFFEES_CACHE_KEY).await
        {
            debug!("Cache hit for coffees");
            return Ok(coffees);
        }

        let coffees = self.fetch_coffees().await?;

        self.inner
            .cache
            .insert(
                COFFEES_CACHE_KEY.to_string(),
                CacheValue::Coffees(coffees.clone()),
            )
            .await;

        Ok(coffees)
    }

    /// Get a single coffee by its id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no coffee has this id, or any
    /// error from fetching the list.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_coffee(&self, id: &CoffeeId) -> Result<Coffee, CatalogError> {
        self.get_coffees()
            .await?
            .into_iter()
            .find(|coffee| &coffee.id == id)
            .ok_or_else(|| CatalogError::NotFound(format!("Coffee not found: {id}")))
    }

    /// Invalidate all cached data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}
