//! PokeAPI HTTP client
//!
//! Every request goes through the expiring cache first: a hit is decoded
//! straight from the cached bytes, a miss hits the network and stores the
//! raw body under the request URL before decoding.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::{LocationAreaDetail, LocationAreaPage, Pokemon};
use crate::cache::Cache;

/// Base URL for the PokeAPI
const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when fetching from the PokeAPI
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("request failed with status code {status}: {body}")]
    Status {
        /// The HTTP status code
        status: u16,
        /// The response body, for error reporting
        body: String,
    },

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for fetching PokeAPI resources through the expiring cache
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    cache: Cache,
    base_url: String,
}

impl ApiClient {
    /// Creates a new ApiClient backed by the given cache
    pub fn new(cache: Cache) -> Self {
        Self {
            http: Client::new(),
            cache,
            base_url: POKEAPI_BASE_URL.to_string(),
        }
    }

    /// Replaces the API base URL, e.g. to point at a local test server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the URL of the first location-area page with the given page size
    pub fn location_areas_url(&self, limit: u32) -> String {
        format!("{}/location-area?offset=0&limit={}", self.base_url, limit)
    }

    /// Fetches a page of the location-area listing from the given URL.
    ///
    /// The URL comes from the pagination links of a previous page (or from
    /// [`location_areas_url`](Self::location_areas_url) for the first page).
    pub async fn fetch_location_page(&self, url: &str) -> Result<LocationAreaPage, ApiError> {
        let bytes = self.get_bytes(url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetches the encounter listing for one location area by name or id
    pub async fn fetch_location_area(&self, area: &str) -> Result<LocationAreaDetail, ApiError> {
        let url = format!("{}/location-area/{}", self.base_url, area);
        let bytes = self.get_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetches a full Pokemon record by name or id
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let bytes = self.get_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Returns the raw body for `url`, from the cache when possible.
    ///
    /// On a miss the body is fetched, checked for a success status, and
    /// inserted into the cache under the URL before being returned. Network
    /// I/O happens entirely outside the cache lock.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        if let Some(cached) = self.cache.get(url).await {
            debug!(url, "serving response from cache");
            return Ok(cached);
        }

        debug!(url, "cache miss, fetching from network");
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        if status > 299 {
            return Err(ApiError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        self.cache.add(url, body.clone()).await;
        Ok(body)
    }
}
