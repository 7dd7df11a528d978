use crate::SearchError;
use serde::{Deserialize, Serialize};

/// A single highlighted excerpt inside a matched document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub page: u32,
    pub text_before: String,
    pub matched_text: String,
    pub text_after: String,
}

impl Match {
    pub fn new(
        page: u32,
        text_before: impl Into<String>,
        matched_text: impl Into<String>,
        text_after: impl Into<String>,
    ) -> Self {
        Self {
            page,
            text_before: text_before.into(),
            matched_text: matched_text.into(),
            text_after: text_after.into(),
        }
    }

    pub fn excerpt(&self) -> String {
        format!("{}{}{}", self.text_before, self.matched_text, self.text_after)
    }
}

/// A PDF document that satisfied the query, with its matched spans in source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub date: String,
    pub source: String,
    pub file_size: String,
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchParams {
    query: String,
    sites: Vec<String>,
}

impl SearchParams {
    /// Builds validated parameters. The query is trimmed and must not be blank;
    /// an empty `sites` list means every site is in scope.
    pub fn new(query: impl AsRef<str>, sites: Vec<String>) -> Result<Self, SearchError> {
        let query = query.as_ref().trim();
        if query.is_empty() {
            return Err(SearchError::InvalidInput("query is empty".to_string()));
        }

        let sites = sites
            .into_iter()
            .map(|site| site.trim().to_string())
            .filter(|site| !site.is_empty())
            .collect();

        Ok(Self {
            query: query.to_string(),
            sites,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site_filter(&self) -> bool {
        !self.sites.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    Live,
    Mock,
}
