//! OpenAlex paper adapter.

use std::sync::Arc;

use super::PaperSource;
use crate::client::DiscoveryClient;
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{Paper, Work};

/// Papers from the OpenAlex works index.
#[derive(Debug, Clone)]
pub struct OpenAlexSource {
    client: Arc<DiscoveryClient>,
    per_page: u32,
    year_filter: String,
}

impl OpenAlexSource {
    /// Create an adapter using the configured page size and year window.
    #[must_use]
    pub fn new(client: Arc<DiscoveryClient>, config: &Config) -> Self {
        Self { client, per_page: config.paper_limit, year_filter: config.year_filter() }
    }

    /// Fetch and map papers, surfacing failures.
    ///
    /// # Errors
    ///
    /// Returns the client error on any transport, status or decode failure.
    pub async fn try_fetch_papers(&self, query: &str) -> ClientResult<Vec<Paper>> {
        let response = self.client.search_works(query, self.per_page, &self.year_filter).await?;
        Ok(response.results.into_iter().map(Work::into_paper).collect())
    }
}

#[async_trait::async_trait]
impl PaperSource for OpenAlexSource {
    fn name(&self) -> &'static str {
        "openalex"
    }

    async fn fetch_papers(&self, query: &str) -> Vec<Paper> {
        match self.try_fetch_papers(query).await {
            Ok(papers) => {
                tracing::debug!(source = self.name(), query, count = papers.len(), "Fetched papers");
                papers
            }
            Err(error) => {
                tracing::warn!(
                    source = self.name(),
                    query,
                    %error,
                    retryable = error.is_retryable(),
                    "Paper search failed"
                );
                Vec::new()
            }
        }
    }
}
