//! PokeAPI HTTP client

use crate::error::{PokeApiError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use ttl_cache::Cache;

/// Where a response body came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    Cache,
    Network,
}

impl fmt::Display for FetchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache => write!(f, "cache"),
            Self::Network => write!(f, "network"),
        }
    }
}

/// A raw response body and its origin
#[derive(Debug, Clone)]
pub struct Fetched {
    pub body: Vec<u8>,
    pub source: FetchSource,
}

/// Client for the PokeAPI
///
/// Reads through the shared [`Cache`]: the request URL is the cache key and
/// the raw body is the cached payload.
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Base URL for PokeAPI v2
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a new client against the public API (30 second timeout)
    pub fn new(cache: Cache) -> Result<Self> {
        Self::with_base_url(Self::DEFAULT_BASE_URL, cache)
    }

    /// Create a new client against a custom base URL
    pub fn with_base_url(base_url: &str, cache: Cache) -> Result<Self> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT, cache)
    }

    /// Create a new client with a custom base URL and timeout
    pub fn with_timeout(base_url: &str, timeout: Duration, cache: Cache) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first `/location-area/` page
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// URL of a single location area
    pub fn location_area_url(&self, name: &str) -> String {
        format!(
            "{}/location-area/{}",
            self.base_url,
            urlencoding::encode(&name.to_lowercase())
        )
    }

    /// URL of a single creature
    pub fn pokemon_url(&self, name: &str) -> String {
        format!(
            "{}/pokemon/{}",
            self.base_url,
            urlencoding::encode(&name.to_lowercase())
        )
    }

    /// Fetch a URL, serving from cache when present
    ///
    /// Only successful responses are cached.
    pub async fn fetch(&self, url: &str) -> Result<Fetched> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, source = %FetchSource::Cache, "Fetched");
            return Ok(Fetched {
                body,
                source: FetchSource::Cache,
            });
        }

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "Request failed");
            return Err(PokeApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());
        debug!(url, source = %FetchSource::Network, bytes = body.len(), "Fetched");

        Ok(Fetched {
            body,
            source: FetchSource::Network,
        })
    }

    /// Get a page of location areas
    ///
    /// # Arguments
    /// * `url` - A `next`/`previous` link from an earlier page, or `None` for the first page
    pub async fn location_areas(
        &self,
        url: Option<&str>,
    ) -> Result<(LocationAreaPage, FetchSource)> {
        let url = match url {
            Some(url) => url.to_string(),
            None => self.location_areas_url(),
        };
        self.fetch_json(&url).await
    }

    /// Get the creatures encountered in a location area
    pub async fn location_area(&self, name: &str) -> Result<(LocationArea, FetchSource)> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    /// Get creature details by name
    ///
    /// Returns `None` when the API does not know the name.
    pub async fn pokemon(&self, name: &str) -> Result<Option<(Pokemon, FetchSource)>> {
        match self.fetch_json(&self.pokemon_url(name)).await {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<(T, FetchSource)> {
        let fetched = self.fetch(url).await?;
        let value = serde_json::from_slice(&fetched.body)?;
        Ok((value, fetched.source))
    }
}
