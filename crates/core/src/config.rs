//! Search configuration resolved once at startup.
//!
//! [`SearchConfig`] is built from the deployment environment (or CLI flags)
//! and passed by reference into the orchestrator and backends. Nothing reads
//! the environment after construction.

use crate::{SearchError, SearchMode};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.web-scrape-search.dev";
pub const DEFAULT_SEARCH_PATH: &str = "/api/search-icb";
pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const DEFAULT_MOCK_LATENCY: Duration = Duration::from_millis(1_500);

pub const ENV_API_BASE_URL: &str = "PDF_QUERY_API_BASE_URL";
pub const ENV_USE_MOCK_DATA: &str = "PDF_QUERY_USE_MOCK_DATA";

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base endpoint of the remote search API, without the search path.
    pub base_url: String,
    /// Path appended to `base_url` for search requests.
    pub search_path: String,
    /// Serve every search from local fixtures instead of the remote API.
    pub use_mock_data: bool,
    /// Result cap sent to the server as a hint.
    pub max_results: usize,
    /// Artificial delay applied by the mock backend.
    pub mock_latency: Duration,
    /// Optional per-request timeout. `None` keeps the transport default.
    pub request_timeout: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            use_mock_data: false,
            max_results: DEFAULT_MAX_RESULTS,
            mock_latency: DEFAULT_MOCK_LATENCY,
            request_timeout: None,
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup. A missing or
    /// blank base url falls back to [`DEFAULT_API_BASE_URL`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_API_BASE_URL)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let use_mock_data = lookup(ENV_USE_MOCK_DATA)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        Self {
            base_url,
            use_mock_data,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> SearchMode {
        if self.use_mock_data {
            SearchMode::Mock
        } else {
            SearchMode::Live
        }
    }

    /// Full url of the search endpoint.
    pub fn search_endpoint(&self) -> Result<Url, SearchError> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{}", self.search_path))?)
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if !self.search_path.starts_with('/') {
            return Err(SearchError::Config(format!(
                "search_path must start with '/': {}",
                self.search_path
            )));
        }
        Url::parse(&self.base_url)
            .map_err(|error| SearchError::Config(format!("base_url {}: {error}", self.base_url)))?;
        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
