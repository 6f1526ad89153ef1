//! Featured shelf for the landing view: a random subject browse.

use std::fmt;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::client::DiscoveryClient;
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{Book, DocMapping};

/// Subjects the landing view rotates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeaturedSubject {
    Science,
    Technology,
    History,
    Philosophy,
    Mathematics,
    Physics,
}

impl FeaturedSubject {
    /// Every subject, in display order.
    pub const ALL: [Self; 6] = [
        Self::Science,
        Self::Technology,
        Self::History,
        Self::Philosophy,
        Self::Mathematics,
        Self::Physics,
    ];

    /// Subject name as used in the Open Library query.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Science => "science",
            Self::Technology => "technology",
            Self::History => "history",
            Self::Philosophy => "philosophy",
            Self::Mathematics => "mathematics",
            Self::Physics => "physics",
        }
    }

    /// Pick one subject uniformly at random.
    #[must_use]
    pub fn random() -> Self {
        Self::ALL.choose(&mut rand::thread_rng()).copied().unwrap_or(Self::Science)
    }

    /// Parse a subject name (case-insensitive).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for FeaturedSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query-less book supplier for the landing view.
#[derive(Debug, Clone)]
pub struct FeaturedSupplier {
    client: Arc<DiscoveryClient>,
    limit: u32,
}

impl FeaturedSupplier {
    /// Create a supplier using the configured shelf size.
    #[must_use]
    pub fn new(client: Arc<DiscoveryClient>, config: &Config) -> Self {
        Self { client, limit: config.featured_limit }
    }

    /// Featured books for a random subject. Never fails; errors yield an empty list.
    pub async fn fetch_featured_books(&self) -> Vec<Book> {
        self.fetch_featured_books_for(FeaturedSubject::random()).await
    }

    /// Featured books for a fixed subject. Never fails; errors yield an empty list.
    pub async fn fetch_featured_books_for(&self, subject: FeaturedSubject) -> Vec<Book> {
        match self.try_fetch(subject).await {
            Ok(books) => {
                tracing::debug!(%subject, count = books.len(), "Fetched featured books");
                books
            }
            Err(error) => {
                tracing::warn!(
                    %subject,
                    %error,
                    retryable = error.is_retryable(),
                    "Featured books fetch failed"
                );
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, subject: FeaturedSubject) -> ClientResult<Vec<Book>> {
        let response = self.client.browse_subject(subject.as_str(), self.limit).await?;
        Ok(response.docs.into_iter().map(|doc| doc.into_book(DocMapping::Featured)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_subject_is_from_fixed_set() {
        for _ in 0..32 {
            assert!(FeaturedSubject::ALL.contains(&FeaturedSubject::random()));
        }
    }

    #[test]
    fn test_parse_subject() {
        assert_eq!(FeaturedSubject::parse("Physics"), Some(FeaturedSubject::Physics));
        assert_eq!(FeaturedSubject::parse(" history "), Some(FeaturedSubject::History));
        assert_eq!(FeaturedSubject::parse("cooking"), None);
    }
}
