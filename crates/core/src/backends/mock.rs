//! Offline stand-in for the remote search API.
//!
//! Routes the query onto a fixed fixture set by keyword, waits for the
//! configured latency without blocking the runtime, and emulates site scoping
//! by attributing unscoped fixtures to a randomly chosen directory site before
//! filtering. The site emulation is approximate and only meant for
//! development and fallback use.

use super::fixtures;
use crate::random::{RandomSource, ThreadRandom};
use crate::sites::{matches_any_site, site_directory};
use crate::traits::SearchBackend;
use crate::{SearchConfig, SearchError, SearchParams, SearchResult};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

const GENERAL_EMPTY_THRESHOLD: f64 = 0.8;
const GENERAL_MAX_TAKE: usize = 5;
const SITE_SCOPED_MARKER: &str = "ICB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSet {
    Pathology,
    Climate,
    Finance,
    General,
}

/// Picks the fixture set for a query. Precedence is
/// pathology+nhs, then climate/environment, then finance/budget.
pub fn route_query(query: &str) -> FixtureSet {
    let lowered = query.to_lowercase();
    if lowered.contains("pathology") && lowered.contains("nhs") {
        FixtureSet::Pathology
    } else if lowered.contains("climate") || lowered.contains("environment") {
        FixtureSet::Climate
    } else if lowered.contains("finance") || lowered.contains("budget") {
        FixtureSet::Finance
    } else {
        FixtureSet::General
    }
}

pub struct MockSearchBackend {
    random: Arc<dyn RandomSource>,
    latency: Duration,
}

impl MockSearchBackend {
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_random(config, Arc::new(ThreadRandom))
    }

    pub fn with_random(config: &SearchConfig, random: Arc<dyn RandomSource>) -> Self {
        Self {
            random,
            latency: config.mock_latency,
        }
    }

    fn general_subset(&self) -> Vec<SearchResult> {
        if self.random.unit() > GENERAL_EMPTY_THRESHOLD {
            return Vec::new();
        }
        let take = self.random.below(GENERAL_MAX_TAKE) + 1;
        fixtures::general_results().into_iter().take(take).collect()
    }

    fn attribute_to_site(&self, mut result: SearchResult) -> SearchResult {
        if result.source.contains(SITE_SCOPED_MARKER) {
            return result;
        }

        let directory = site_directory();
        let Some(site) = directory.get(self.random.below(directory.len())) else {
            return result;
        };

        result.url = format!("{}/documents/{}.pdf", site.url, slugify(&result.title));
        result.source = site.name.to_string();
        result
    }
}

#[async_trait]
impl SearchBackend for MockSearchBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search(&self, params: &SearchParams) -> Result<Vec<SearchResult>, SearchError> {
        tokio::time::sleep(self.latency).await;

        let fixture_set = route_query(params.query());
        let mut results = match fixture_set {
            FixtureSet::Pathology => fixtures::pathology_results(),
            FixtureSet::Climate => fixtures::climate_results(),
            FixtureSet::Finance => fixtures::finance_results(),
            FixtureSet::General => self.general_subset(),
        };

        if params.has_site_filter() {
            results = results
                .into_iter()
                .map(|result| self.attribute_to_site(result))
                .filter(|result| matches_any_site(result, params.sites()))
                .collect();
        }

        tracing::debug!(?fixture_set, count = results.len(), "mock search complete");
        Ok(results)
    }
}

fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::site_by_url;

    struct FixedRandom {
        unit: f64,
        index: usize,
    }

    impl RandomSource for FixedRandom {
        fn unit(&self) -> f64 {
            self.unit
        }

        fn below(&self, upper: usize) -> usize {
            self.index.min(upper.saturating_sub(1))
        }
    }

    fn instant_config() -> SearchConfig {
        SearchConfig {
            mock_latency: Duration::ZERO,
            use_mock_data: true,
            ..Default::default()
        }
    }

    fn backend_with(unit: f64, index: usize) -> MockSearchBackend {
        MockSearchBackend::with_random(&instant_config(), Arc::new(FixedRandom { unit, index }))
    }

    fn directory_index(url: &str) -> usize {
        site_directory()
            .iter()
            .position(|site| site.url == url)
            .unwrap_or_default()
    }

    #[test]
    fn routing_follows_keyword_precedence() {
        assert_eq!(route_query("NHS Pathology"), FixtureSet::Pathology);
        assert_eq!(route_query("pathology nhs climate budget"), FixtureSet::Pathology);
        assert_eq!(route_query("pathology climate"), FixtureSet::Climate);
        assert_eq!(route_query("Environment and Finance"), FixtureSet::Climate);
        assert_eq!(route_query("FINANCE"), FixtureSet::Finance);
        assert_eq!(route_query("budget report"), FixtureSet::Finance);
        assert_eq!(route_query("pathology only"), FixtureSet::General);
    }

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(
            slugify("Public  Health\tStrategy 2023"),
            "public-health-strategy-2023"
        );
    }

    #[tokio::test]
    async fn pathology_query_returns_curated_set() -> Result<(), SearchError> {
        let backend = backend_with(0.0, 0);
        let params = SearchParams::new("pathology NHS minutes", Vec::new())?;
        let results = backend.search(&params).await?;
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].title,
            "NHS North West London ICB Board Meeting Minutes"
        );
        Ok(())
    }

    #[tokio::test]
    async fn budget_query_returns_finance_set() -> Result<(), SearchError> {
        let backend = backend_with(0.0, 0);
        let params = SearchParams::new("budget report", Vec::new())?;
        let titles: Vec<String> = backend
            .search(&params)
            .await?
            .into_iter()
            .map(|result| result.title)
            .collect();
        assert_eq!(titles.len(), 2);
        assert!(titles.contains(&"Annual Financial Report FY2022-23".to_string()));
        assert!(titles.contains(&"Budget Allocation Report 2023".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn general_query_can_come_back_empty() -> Result<(), SearchError> {
        let backend = backend_with(0.95, 4);
        let params = SearchParams::new("digital strategy", Vec::new())?;
        assert!(backend.search(&params).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn general_subset_is_clipped_to_available() -> Result<(), SearchError> {
        let backend = backend_with(0.1, 4);
        let params = SearchParams::new("digital strategy", Vec::new())?;
        assert_eq!(backend.search(&params).await?.len(), 3);

        let backend = backend_with(0.8, 0);
        assert_eq!(backend.search(&params).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn reassigned_results_survive_their_own_site_filter() -> Result<(), SearchError> {
        let site_url = "https://www.kentandmedway.icb.nhs.uk";
        let backend = backend_with(0.0, directory_index(site_url));
        let params = SearchParams::new("pathology NHS", vec![site_url.to_string()])?;

        let results = backend.search(&params).await?;
        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(result.source, "Kent and Medway");
            assert!(result.url.starts_with(site_url));
            assert!(result.url.ends_with(".pdf"));
        }
        assert_eq!(
            results[0].url,
            "https://www.kentandmedway.icb.nhs.uk/documents/nhs-north-west-london-icb-board-meeting-minutes.pdf"
        );
        Ok(())
    }

    #[tokio::test]
    async fn results_assigned_elsewhere_are_filtered_out() -> Result<(), SearchError> {
        let backend = backend_with(0.0, directory_index("https://bsw.icb.nhs.uk"));
        let params = SearchParams::new("climate", vec!["https://www.frimley.icb.nhs.uk".to_string()])?;
        assert!(backend.search(&params).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn every_filtered_result_matches_a_requested_site() -> Result<(), SearchError> {
        let backend = MockSearchBackend::new(&instant_config());
        let requested = vec![
            "https://www.sussex.icb.nhs.uk".to_string(),
            "https://bnssg.icb.nhs.uk".to_string(),
        ];
        for query in ["NHS pathology", "climate", "finance", "healthcare"] {
            let params = SearchParams::new(query, requested.clone())?;
            for _ in 0..25 {
                for result in backend.search(&params).await? {
                    let matched = requested
                        .iter()
                        .filter_map(|url| site_by_url(url))
                        .any(|site| site.covers(&result));
                    assert!(matched, "{} escaped the site filter", result.title);
                }
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn latency_is_applied() -> Result<(), SearchError> {
        let config = SearchConfig {
            mock_latency: Duration::from_millis(30),
            ..instant_config()
        };
        let backend = MockSearchBackend::with_random(&config, Arc::new(FixedRandom { unit: 0.0, index: 0 }));
        let params = SearchParams::new("budget", Vec::new())?;

        let started = std::time::Instant::now();
        backend.search(&params).await?;
        assert!(started.elapsed() >= Duration::from_millis(30));
        Ok(())
    }

    #[tokio::test(flavor = "current_thread")]
    async fn latency_leaves_the_runtime_free() -> Result<(), SearchError> {
        let config = SearchConfig {
            mock_latency: Duration::from_millis(300),
            ..instant_config()
        };
        let backend = MockSearchBackend::with_random(&config, Arc::new(FixedRandom { unit: 0.0, index: 0 }));
        let params = SearchParams::new("budget", Vec::new())?;

        let started = std::time::Instant::now();
        let mut search = backend.search(&params);
        let timer_won = tokio::select! {
            biased;
            _ = &mut search => false,
            _ = tokio::time::sleep(Duration::from_millis(20)) => true,
        };
        assert!(timer_won, "mock search held the runtime through its latency");
        assert!(started.elapsed() < Duration::from_millis(300));

        assert_eq!(search.await?.len(), 2);
        Ok(())
    }
}
