use crate::backends::{MockSearchBackend, RemoteSearchClient};
use crate::notify::{Notification, SharedNotifier};
use crate::traits::SearchBackend;
use crate::{SearchConfig, SearchError, SearchMode, SearchParams, SearchResult};

/// Chooses between the live backend and the mock backend and absorbs every
/// failure, so callers always receive a (possibly empty) list.
pub struct SearchOrchestrator<P, F>
where
    P: SearchBackend,
    F: SearchBackend,
{
    mode: SearchMode,
    primary: P,
    fallback: F,
    notifier: SharedNotifier,
}

impl SearchOrchestrator<RemoteSearchClient, MockSearchBackend> {
    /// Wires the remote client and the mock generator from one configuration.
    pub fn from_config(config: &SearchConfig, notifier: SharedNotifier) -> Result<Self, SearchError> {
        config.validate()?;
        let primary = RemoteSearchClient::new(config, notifier.clone())?;
        let fallback = MockSearchBackend::new(config);
        Ok(Self::new(config.mode(), primary, fallback, notifier))
    }
}

impl<P, F> SearchOrchestrator<P, F>
where
    P: SearchBackend + Send + Sync,
    F: SearchBackend + Send + Sync,
{
    pub fn new(mode: SearchMode, primary: P, fallback: F, notifier: SharedNotifier) -> Self {
        Self {
            mode,
            primary,
            fallback,
            notifier,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub async fn search(&self, params: &SearchParams) -> Vec<SearchResult> {
        match self.mode {
            SearchMode::Mock => self.search_mock(params).await,
            SearchMode::Live => self.search_live(params).await,
        }
    }

    async fn search_mock(&self, params: &SearchParams) -> Vec<SearchResult> {
        match self.fallback.search(params).await {
            Ok(results) => {
                self.announce(&results, "Search completed successfully (mock data)");
                results
            }
            Err(error) => {
                tracing::error!(backend = self.fallback.name(), %error, "mock search failed");
                self.notifier
                    .notify(Notification::error("Search failed, no results available"));
                Vec::new()
            }
        }
    }

    async fn search_live(&self, params: &SearchParams) -> Vec<SearchResult> {
        match self.primary.search(params).await {
            Ok(results) => {
                self.announce(&results, "Search completed successfully");
                results
            }
            Err(error) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    %error,
                    "primary search failed, using fallback"
                );
                self.notifier.notify(Notification::info(
                    "Search service unavailable, showing sample results instead",
                ));
                self.search_fallback(params).await
            }
        }
    }

    async fn search_fallback(&self, params: &SearchParams) -> Vec<SearchResult> {
        match self.fallback.search(params).await {
            Ok(results) => {
                self.announce(&results, "Search completed successfully (mock data)");
                results
            }
            Err(error) => {
                tracing::error!(backend = self.fallback.name(), %error, "fallback search failed");
                self.notifier
                    .notify(Notification::error("Search failed, no results available"));
                Vec::new()
            }
        }
    }

    fn announce(&self, results: &[SearchResult], success_message: &str) {
        if results.is_empty() {
            self.notifier.notify(Notification::info("No results found"));
        } else {
            self.notifier.notify(Notification::success(success_message));
        }
    }
}
