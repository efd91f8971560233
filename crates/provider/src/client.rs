//! HTTP client for the metadata provider

use crate::error::{LookupError, LookupResult};
use crate::response::ProviderEnvelope;
use log::debug;
use reelview_core::{LookupOutcome, SearchQuery};
use reqwest::Client as ReqwestClient;
use std::time::Duration;

/// Provider client configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider endpoint
    pub base_url: String,
    /// API key sent with every request
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ProviderConfig {
    const DEFAULT_BASE_URL: &'static str = "http://www.omdbapi.com/";

    /// Creates a configuration for an API key with default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("reelview/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets a custom endpoint URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for a single-lookup-per-call metadata provider
///
/// Holds no shared state beyond the connection pool inside reqwest; it never
/// persists anything.
#[derive(Clone)]
pub struct ProviderClient {
    inner: ReqwestClient,
    config: ProviderConfig,
}

impl ProviderClient {
    /// Creates a client from a configuration
    pub fn new(config: ProviderConfig) -> LookupResult<Self> {
        let inner = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| LookupError::Unexpected(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Looks up a title, returning a single record or a listing page
    ///
    /// Unset year/genre filters are omitted from the request entirely.
    /// Transport failures and non-success statuses map to `Unreachable`,
    /// a well-formed provider miss maps to `NotFound`, and anything else
    /// maps to `Unexpected`.
    pub async fn lookup(&self, query: &SearchQuery, page: u32) -> LookupResult<LookupOutcome> {
        if query.is_empty() {
            return Err(LookupError::Unexpected("empty title".to_string()));
        }

        let params = build_params(&self.config.api_key, query, page.max(1));

        let response = self
            .inner
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                debug!("provider request failed: {}", e);
                LookupError::Unreachable
            })?;

        if !response.status().is_success() {
            debug!("provider returned HTTP {}", response.status().as_u16());
            return Err(LookupError::Unreachable);
        }

        let envelope: ProviderEnvelope = response
            .json()
            .await
            .map_err(|e| LookupError::Unexpected(e.to_string()))?;

        envelope.into_outcome(&query.title, page.max(1))
    }

    /// Probes the provider with a minimal request
    pub async fn is_available(&self) -> bool {
        self.inner
            .get(&self.config.base_url)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

/// Builds the outbound query parameters for a lookup
fn build_params(api_key: &str, query: &SearchQuery, page: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("apikey", api_key.to_string()),
        ("t", query.title.clone()),
    ];
    if let Some(year) = &query.year {
        params.push(("y", year.clone()));
    }
    if let Some(genre) = &query.genre {
        params.push(("genre", genre.clone()));
    }
    params.push(("page", page.to_string()));
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ProviderConfig::new("testkey");
        assert_eq!(config.base_url, "http://www.omdbapi.com/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("reelview/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ProviderConfig::new("testkey")
            .with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_client_creation() {
        let client = ProviderClient::new(ProviderConfig::new("testkey"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_params_omit_unset_filters() {
        let query = SearchQuery::new("Inception");
        let params = build_params("key", &query, 1);

        assert!(params.iter().any(|(k, v)| *k == "t" && v == "Inception"));
        assert!(!params.iter().any(|(k, _)| *k == "y"));
        assert!(!params.iter().any(|(k, _)| *k == "genre"));
        assert!(params.iter().any(|(k, v)| *k == "page" && v == "1"));
    }

    #[test]
    fn test_params_include_set_filters() {
        let query = SearchQuery::new("Inception")
            .with_year("2010")
            .with_genre("Thriller");
        let params = build_params("key", &query, 2);

        assert!(params.iter().any(|(k, v)| *k == "y" && v == "2010"));
        assert!(params.iter().any(|(k, v)| *k == "genre" && v == "Thriller"));
        assert!(params.iter().any(|(k, v)| *k == "page" && v == "2"));
    }

    #[tokio::test]
    async fn test_lookup_rejects_empty_title() {
        let client = ProviderClient::new(ProviderConfig::new("testkey")).unwrap();
        let result = client.lookup(&SearchQuery::new(""), 1).await;
        assert!(matches!(result, Err(LookupError::Unexpected(_))));
    }

    #[tokio::test]
    async fn test_lookup_unreachable_endpoint() {
        // Nothing listens on this port; transport failure maps to Unreachable
        let config = ProviderConfig::new("testkey")
            .with_base_url("http://127.0.0.1:9/")
            .with_timeout(Duration::from_secs(2));
        let client = ProviderClient::new(config).unwrap();

        let result = client.lookup(&SearchQuery::new("Inception"), 1).await;
        assert!(matches!(result, Err(LookupError::Unreachable)));
    }

    // Network tests - only run with network access
    #[tokio::test]
    #[ignore = "Requires network access and a real API key"]
    async fn test_real_lookup() {
        let key = match std::env::var("OMDB_API_KEY") {
            Ok(k) => k,
            Err(_) => {
                eprintln!("OMDB_API_KEY not set, skipping test");
                return;
            }
        };

        let client = ProviderClient::new(ProviderConfig::new(key)).unwrap();
        match client.lookup(&SearchQuery::new("Inception"), 1).await {
            Ok(LookupOutcome::Single(record)) => assert_eq!(record.title, "Inception"),
            Ok(other) => println!("got listing instead of single record: {:?}", other),
            Err(e) => eprintln!("Lookup failed: {}", e),
        }
    }
}
