//! Open Library book adapter.

use std::sync::Arc;

use super::BookSource;
use crate::client::DiscoveryClient;
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{Book, DocMapping};

/// Books from the Open Library search index.
#[derive(Debug, Clone)]
pub struct OpenLibrarySource {
    client: Arc<DiscoveryClient>,
    default_limit: u32,
}

impl OpenLibrarySource {
    /// Create an adapter using the configured default cap.
    #[must_use]
    pub fn new(client: Arc<DiscoveryClient>, config: &Config) -> Self {
        Self { client, default_limit: config.book_limit }
    }

    /// Fetch and map books, surfacing failures.
    ///
    /// # Errors
    ///
    /// Returns the client error on any transport, status or decode failure.
    pub async fn try_fetch_books(&self, query: &str, limit: u32) -> ClientResult<Vec<Book>> {
        let response = self.client.search_books(query, limit).await?;
        Ok(response.docs.into_iter().map(|doc| doc.into_book(DocMapping::Search)).collect())
    }
}

#[async_trait::async_trait]
impl BookSource for OpenLibrarySource {
    fn name(&self) -> &'static str {
        "openlibrary"
    }

    fn default_limit(&self) -> u32 {
        self.default_limit
    }

    async fn fetch_books(&self, query: &str, limit: u32) -> Vec<Book> {
        match self.try_fetch_books(query, limit).await {
            Ok(books) => {
                tracing::debug!(source = self.name(), query, count = books.len(), "Fetched books");
                books
            }
            Err(error) => {
                tracing::warn!(
                    source = self.name(),
                    query,
                    %error,
                    retryable = error.is_retryable(),
                    "Book search failed"
                );
                Vec::new()
            }
        }
    }
}
