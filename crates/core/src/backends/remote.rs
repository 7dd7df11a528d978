use crate::notify::{Notification, SharedNotifier};
use crate::traits::SearchBackend;
use crate::{SearchConfig, SearchError, SearchParams, SearchResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/// Wire body of a search request. `sites` is left out entirely when no
/// filter is set; the server treats an absent list as "all sites".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoteSearchRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sites: Option<&'a [String]>,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct RemoteSearchResponse {
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub struct RemoteSearchClient {
    client: Client,
    endpoint: Url,
    max_results: usize,
    notifier: SharedNotifier,
}

impl RemoteSearchClient {
    pub fn new(config: &SearchConfig, notifier: SharedNotifier) -> Result<Self, SearchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.search_endpoint()?,
            max_results: config.max_results,
            notifier,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn fail(&self, error: SearchError) -> SearchError {
        let detail = match &error {
            SearchError::RemoteRequestFailed(message) => message.clone(),
            other => other.to_string(),
        };
        tracing::error!(endpoint = %self.endpoint, error = %detail, "search api error");
        self.notifier
            .notify(Notification::error(format!("Search failed: {detail}")));
        error
    }
}

#[async_trait]
impl SearchBackend for RemoteSearchClient {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn search(&self, params: &SearchParams) -> Result<Vec<SearchResult>, SearchError> {
        let body = RemoteSearchRequest {
            query: params.query(),
            sites: params.has_site_filter().then(|| params.sites()),
            max_results: self.max_results,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            query = params.query(),
            sites = params.sites().len(),
            "sending search request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|error| self.fail(SearchError::RemoteRequestFailed(error.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<RemoteErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));
            return Err(self.fail(SearchError::RemoteRequestFailed(message)));
        }

        let payload = response
            .bytes()
            .await
            .map_err(|error| self.fail(SearchError::RemoteRequestFailed(error.to_string())))?;

        let decoded: RemoteSearchResponse = serde_json::from_slice(&payload)
            .map_err(|error| self.fail(SearchError::MalformedResponse(error.to_string())))?;

        if let Some(message) = decoded.message.as_deref() {
            tracing::debug!(message, "search api message");
        }
        let results = decoded.results.unwrap_or_default();
        tracing::debug!(count = results.len(), "search api returned results");
        Ok(results)
    }
}
