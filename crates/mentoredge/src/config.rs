//! Configuration for the Semantic Scholar client and the recommendation run.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Rate limit delay between requests without API key (200ms = 5 req/s).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(200);

    /// Rate limit delay between requests with API key (10ms = 100 req/s).
    pub const RATE_LIMIT_DELAY_WITH_KEY: Duration = Duration::from_millis(10);

    /// Retries for transient failures (5xx, connection resets).
    pub const MAX_RETRIES: u32 = 3;

    /// Longest `Retry-After` the client will honor.
    pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Largest `limit` the relevance search endpoint accepts.
    pub const MAX_SEARCH_LIMIT: usize = 100;
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields needed to score and export a recommendation.
    pub const SEARCH: &[&str] =
        &["paperId", "title", "authors", "year", "abstract", "citationCount", "url"];
}

/// Defaults for a recommendation run.
pub mod defaults {
    /// Papers fetched per keyword query.
    pub const PAPERS_PER_KEYWORD: usize = 50;

    /// Recommendations returned.
    pub const TOP_N: usize = 20;

    /// Keyword queries in flight at once.
    pub const FETCH_CONCURRENCY: usize = 1;

    /// CSV file written by the CLI.
    pub const OUTPUT_FILE: &str = "sample_output.csv";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Minimum interval between requests.
    pub rate_limit_delay: Duration,

    /// Retries for transient failures.
    pub max_retries: u32,

    /// Cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// The throttle is adjusted on API key presence:
    /// - Without key: 5 req/s
    /// - With key: 100 req/s
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        let rate_limit_delay = if api_key.is_some() {
            api::RATE_LIMIT_DELAY_WITH_KEY
        } else {
            api::RATE_LIMIT_DELAY
        };

        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay,
            max_retries: api::MAX_RETRIES,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            max_retries: 0,
            cache_ttl: Duration::from_secs(0), // No caching in tests
            cache_max_size: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SEMANTIC_SCHOLAR_API_KEY`; an empty value counts as unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        Ok(Self::new(api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.rate_limit_delay, api::RATE_LIMIT_DELAY);
    }

    #[test]
    fn test_config_with_api_key_speeds_up_throttle() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.rate_limit_delay, api::RATE_LIMIT_DELAY_WITH_KEY);
    }

    #[test]
    fn test_for_testing_disables_throttle_and_cache() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.graph_api_url, "http://127.0.0.1:9999/graph/v1");
        assert_eq!(config.rate_limit_delay, Duration::ZERO);
        assert_eq!(config.cache_max_size, 0);
    }

    #[test]
    fn test_search_fields() {
        assert!(fields::SEARCH.contains(&"paperId"));
        assert!(fields::SEARCH.contains(&"citationCount"));
        assert!(fields::SEARCH.contains(&"url"));
    }
}
