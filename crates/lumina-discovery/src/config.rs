//! Configuration for the discovery pipeline.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// OpenAlex works endpoint (scholarly papers).
    pub const OPENALEX_WORKS: &str = "https://api.openalex.org/works";

    /// Open Library search endpoint (books).
    pub const OPENLIBRARY_SEARCH: &str = "https://openlibrary.org/search.json";

    /// Open Library cover image base.
    pub const OPENLIBRARY_COVERS: &str = "https://covers.openlibrary.org/b/id";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Upstream calls are not retried unless configured otherwise.
    pub const MAX_RETRIES: u32 = 0;

    /// Maximum keepalive connections per host.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Quiet interval before a typed query is dispatched.
    pub const DEBOUNCE: Duration = Duration::from_millis(600);
}

/// Result caps and filters applied to upstream requests.
pub mod limits {
    /// Papers requested per search (`per-page`).
    pub const PAPERS_PER_SEARCH: u32 = 12;

    /// Books requested per search when the caller does not override it.
    pub const BOOKS_PER_SEARCH: u32 = 10;

    /// Books requested for the featured shelf.
    pub const FEATURED_BOOKS: u32 = 24;

    /// Earliest publication year kept by the paper search.
    pub const PAPER_YEAR_FROM: i32 = 2010;

    /// Latest publication year kept by the paper search.
    pub const PAPER_YEAR_TO: i32 = 2025;

    /// Tags kept per record when mapping upstream responses.
    pub const TAGS_PER_RECORD: usize = 3;

    /// Characters kept from a reconstructed abstract.
    pub const ABSTRACT_PREVIEW_CHARS: usize = 200;
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact address for the OpenAlex polite pool (optional).
    pub contact_email: Option<String>,

    /// OpenAlex works endpoint (overridable for mock servers).
    pub paper_api_url: String,

    /// Open Library search endpoint (overridable for mock servers).
    pub book_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Retries for transient failures.
    pub max_retries: u32,

    /// Papers requested per search.
    pub paper_limit: u32,

    /// Books requested per search.
    pub book_limit: u32,

    /// Books requested for the featured shelf.
    pub featured_limit: u32,

    /// Inclusive publication year window for papers.
    pub year_range: (i32, i32),

    /// Debounce quiet interval for interactive input.
    pub debounce: Duration,
}

impl Config {
    /// Create a configuration pointing at the public APIs.
    #[must_use]
    pub fn new(contact_email: Option<String>) -> Self {
        Self {
            contact_email,
            paper_api_url: api::OPENALEX_WORKS.to_string(),
            book_api_url: api::OPENLIBRARY_SEARCH.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            paper_limit: limits::PAPERS_PER_SEARCH,
            book_limit: limits::BOOKS_PER_SEARCH,
            featured_limit: limits::FEATURED_BOOKS,
            year_range: (limits::PAPER_YEAR_FROM, limits::PAPER_YEAR_TO),
            debounce: api::DEBOUNCE,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            paper_api_url: format!("{}/works", base_url),
            book_api_url: format!("{}/search.json", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0,
            debounce: Duration::from_millis(0),
            ..Self::new(None)
        }
    }

    /// Create configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::new(std::env::var("OPENALEX_MAILTO").ok());
        if let Ok(url) = std::env::var("LUMINA_PAPER_API_URL") {
            config.paper_api_url = url;
        }
        if let Ok(url) = std::env::var("LUMINA_BOOK_API_URL") {
            config.book_api_url = url;
        }
        if let Ok(retries) = std::env::var("LUMINA_MAX_RETRIES") {
            config.max_retries = retries
                .parse()
                .map_err(|e| anyhow::anyhow!("LUMINA_MAX_RETRIES must be an integer: {e}"))?;
        }
        Ok(config)
    }

    /// Check if a polite-pool contact address is configured.
    #[must_use]
    pub const fn has_contact_email(&self) -> bool {
        self.contact_email.is_some()
    }

    /// OpenAlex `filter` value for the configured year window.
    #[must_use]
    pub fn year_filter(&self) -> String {
        format!("publication_year:{}-{}", self.year_range.0, self.year_range.1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.has_contact_email());
        assert_eq!(config.paper_api_url, api::OPENALEX_WORKS);
        assert_eq!(config.paper_limit, 12);
        assert_eq!(config.book_limit, 10);
        assert_eq!(config.featured_limit, 24);
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.debounce, Duration::from_millis(600));
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.paper_api_url, "http://127.0.0.1:9999/works");
        assert_eq!(config.book_api_url, "http://127.0.0.1:9999/search.json");
        assert_eq!(config.debounce, Duration::ZERO);
    }

    #[test]
    fn test_year_filter() {
        assert_eq!(Config::default().year_filter(), "publication_year:2010-2025");
    }
}
