//! Semantic Scholar API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - A shared throttle (5 req/s without key, 100 req/s with one) applied to
//!   every attempt, retries included, and honoring `Retry-After`
//! - Response caching with 5-minute TTL

mod throttle;

use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api, fields};
use crate::error::{ClientError, ClientResult};
use crate::models::{Paper, SearchResponse};

pub use throttle::Throttle;

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Response cache.
    cache: Cache<String, serde_json::Value>,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Shared request throttle.
    throttle: Throttle,

    /// Request timeout, reported in timeout errors.
    request_timeout: Duration,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(config.max_retries);

        let throttle = Throttle::new(config.rate_limit_delay);

        // Layers run in order: retry wraps the throttle, so each attempt waits for a permit.
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .with(throttle.clone())
            .build();

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            client,
            cache,
            api_key: config.api_key,
            graph_api_url: config.graph_api_url,
            throttle,
            request_timeout: config.request_timeout,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for papers by keyword, best match first.
    ///
    /// `limit` is clamped to the endpoint's 1..=100 range. The year bounds are
    /// inclusive; either may be open. Malformed items are skipped.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or an unparseable response body.
    pub async fn search_papers(
        &self,
        query: &str,
        limit: usize,
        min_year: Option<i32>,
        max_year: Option<i32>,
    ) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/paper/search", self.graph_api_url);
        let limit = limit.clamp(1, api::MAX_SEARCH_LIMIT);

        let mut params = vec![
            ("query".to_string(), query.to_string()),
            ("offset".to_string(), "0".to_string()),
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields::SEARCH.join(",")),
        ];

        if let Some(range) = year_filter(min_year, max_year) {
            params.push(("year".to_string(), range));
        }

        let response: SearchResponse = self.get(&url, &params).await?;
        let (papers, skipped) = response.into_papers();

        tracing::debug!(query, returned = papers.len(), skipped, "Search completed");

        Ok(papers)
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        // Check cache
        let cache_key = self.cache_key("GET", url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            return serde_json::from_value(cached).map_err(ClientError::from);
        }

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = self.handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;

        // Cache response
        self.cache.insert(cache_key, value.clone()).await;

        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Surface transport timeouts as their own variant.
    fn map_send_error(&self, err: reqwest_middleware::Error) -> ClientError {
        match err {
            reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => {
                ClientError::Timeout(self.request_timeout)
            }
            reqwest_middleware::Error::Reqwest(e) => ClientError::Http(e),
            other => ClientError::Middleware(other),
        }
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = throttle::retry_after(&response)
                    .map_or(api::MAX_RETRY_AFTER.as_secs(), |delay| delay.as_secs());

                Err(ClientError::rate_limited(retry_after))
            }
            401 | 403 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::unauthorized(status.as_u16(), text))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    /// Generate cache key.
    fn cache_key(&self, method: &str, url: &str, params: &[(String, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(method.as_bytes());
        hasher.update(b"|");
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

/// Build the `year` query value: `2020-2024`, `2020-` or `-2024`.
fn year_filter(min_year: Option<i32>, max_year: Option<i32>) -> Option<String> {
    match (min_year, max_year) {
        (None, None) => None,
        (Some(min), Some(max)) => Some(format!("{min}-{max}")),
        (Some(min), None) => Some(format!("{min}-")),
        (None, Some(max)) => Some(format!("-{max}")),
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("has_api_key", &self.has_api_key())
            .field("throttle", &self.throttle.interval())
            .finish()
    }
}
