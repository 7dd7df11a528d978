use crate::{SearchError, SearchParams, SearchResult};
use async_trait::async_trait;

#[async_trait]
pub trait SearchBackend {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    async fn search(&self, params: &SearchParams) -> Result<Vec<SearchResult>, SearchError>;
}
