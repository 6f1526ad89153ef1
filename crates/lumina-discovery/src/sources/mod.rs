//! Source adapters.
//!
//! Each adapter wraps one upstream search endpoint and maps its schema into
//! the shared record shape. Adapters are fail-soft: a transport error, a
//! non-success status or an unreadable body is logged and becomes an empty
//! list, so one unavailable source never hides the other's results.

mod featured;
mod openalex;
mod openlibrary;

pub use featured::{FeaturedSubject, FeaturedSupplier};
pub use openalex::OpenAlexSource;
pub use openlibrary::OpenLibrarySource;

use crate::config::limits;
use crate::models::{Book, Paper};

/// Trait for scholarly-paper sources.
#[async_trait::async_trait]
pub trait PaperSource: Send + Sync {
    /// Source name for logs.
    fn name(&self) -> &'static str;

    /// Fetch papers matching `query`. Never fails; errors yield an empty list.
    async fn fetch_papers(&self, query: &str) -> Vec<Paper>;
}

/// Trait for book sources.
#[async_trait::async_trait]
pub trait BookSource: Send + Sync {
    /// Source name for logs.
    fn name(&self) -> &'static str;

    /// Result cap used when the caller has no preference.
    fn default_limit(&self) -> u32 {
        limits::BOOKS_PER_SEARCH
    }

    /// Fetch at most `limit` books matching `query`. Never fails; errors yield an empty list.
    async fn fetch_books(&self, query: &str, limit: u32) -> Vec<Book>;
}
