//! Aggregator: fan out to both sources, rank, interleave.

pub mod interleave;
pub mod scoring;

use std::sync::Arc;

use crate::client::DiscoveryClient;
use crate::config::Config;
use crate::models::UnifiedResult;
use crate::sources::{BookSource, OpenAlexSource, OpenLibrarySource, PaperSource};

pub use interleave::{interleave, rank_and_interleave};

/// Unified search over a paper source and a book source.
#[derive(Clone)]
pub struct Aggregator {
    papers: Arc<dyn PaperSource>,
    books: Arc<dyn BookSource>,
}

impl Aggregator {
    /// Create an aggregator over arbitrary sources.
    #[must_use]
    pub fn new(papers: Arc<dyn PaperSource>, books: Arc<dyn BookSource>) -> Self {
        Self { papers, books }
    }

    /// Create an aggregator over OpenAlex and Open Library.
    #[must_use]
    pub fn from_client(client: Arc<DiscoveryClient>, config: &Config) -> Self {
        Self::new(
            Arc::new(OpenAlexSource::new(Arc::clone(&client), config)),
            Arc::new(OpenLibrarySource::new(client, config)),
        )
    }

    /// Search both sources concurrently and return one ordered list.
    ///
    /// Waits for both sources to settle. A failing source contributes
    /// nothing; if both fail the result is empty. A blank query returns an
    /// empty list without touching the network.
    pub async fn search_resources(&self, query: &str) -> Vec<UnifiedResult> {
        if query.trim().is_empty() {
            tracing::debug!("Blank query, skipping upstream search");
            return Vec::new();
        }

        let (papers, books) = futures::join!(
            self.papers.fetch_papers(query),
            self.books.fetch_books(query, self.books.default_limit()),
        );

        tracing::info!(
            query,
            papers = papers.len(),
            books = books.len(),
            paper_source = self.papers.name(),
            book_source = self.books.name(),
            "Search completed"
        );

        rank_and_interleave(papers, books)
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("papers", &self.papers.name())
            .field("books", &self.books.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::models::{Book, Paper, ResourceType};

    struct FixedPapers(Vec<Paper>);

    #[async_trait::async_trait]
    impl PaperSource for FixedPapers {
        fn name(&self) -> &'static str {
            "fixed-papers"
        }

        async fn fetch_papers(&self, _query: &str) -> Vec<Paper> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct CountingBooks {
        books: Vec<Book>,
        calls: AtomicUsize,
        last_limit: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl BookSource for CountingBooks {
        fn name(&self) -> &'static str {
            "counting-books"
        }

        async fn fetch_books(&self, _query: &str, limit: u32) -> Vec<Book> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.last_limit.store(limit as usize, Ordering::SeqCst);
            self.books.clone()
        }
    }

    #[tokio::test]
    async fn test_search_merges_both_sources() {
        let papers = vec![
            Paper { id: "p1".into(), citation_count: 1, ..Default::default() },
            Paper { id: "p2".into(), citation_count: 9, ..Default::default() },
        ];
        let books = Arc::new(CountingBooks {
            books: vec![Book { id: "b1".into(), ..Default::default() }],
            ..Default::default()
        });
        let aggregator = Aggregator::new(Arc::new(FixedPapers(papers)), books.clone());

        let results = aggregator.search_resources("graphs").await;
        let ids: Vec<_> = results.iter().map(UnifiedResult::id).collect();
        assert_eq!(ids, ["p2", "p1", "b1"]);
        assert_eq!(books.last_limit.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn test_blank_query_skips_sources() {
        let books = Arc::new(CountingBooks::default());
        let aggregator = Aggregator::new(Arc::new(FixedPapers(Vec::new())), books.clone());

        assert!(aggregator.search_resources("   ").await.is_empty());
        assert_eq!(books.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_sources_give_empty_result() {
        let aggregator =
            Aggregator::new(Arc::new(FixedPapers(Vec::new())), Arc::new(CountingBooks::default()));
        assert!(aggregator.search_resources("nothing").await.is_empty());
    }

    #[tokio::test]
    async fn test_only_books_when_papers_empty() {
        let books = Arc::new(CountingBooks {
            books: vec![
                Book { id: "b1".into(), ..Default::default() },
                Book { id: "b2".into(), ..Default::default() },
            ],
            ..Default::default()
        });
        let aggregator = Aggregator::new(Arc::new(FixedPapers(Vec::new())), books);
        let results = aggregator.search_resources("novels").await;
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.resource_type() == ResourceType::Book));
    }
}
