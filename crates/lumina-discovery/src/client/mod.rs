//! HTTP client for the OpenAlex and Open Library search APIs.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Optional retry middleware with exponential backoff (off by default)
//! - Status-code mapping into [`ClientError`]

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{BookSearchResponse, WorksResponse};

/// Client shared by every source adapter.
#[derive(Clone)]
pub struct DiscoveryClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// OpenAlex polite-pool contact (optional).
    contact_email: Option<String>,

    /// OpenAlex works endpoint.
    paper_api_url: String,

    /// Open Library search endpoint.
    book_api_url: String,
}

impl DiscoveryClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("lumina-discovery/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_millis(500), Duration::from_secs(10))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            contact_email: config.contact_email.clone(),
            paper_api_url: config.paper_api_url.clone(),
            book_api_url: config.book_api_url.clone(),
        })
    }

    /// Check if a polite-pool contact is configured.
    #[must_use]
    pub fn has_contact_email(&self) -> bool {
        self.contact_email.is_some()
    }

    /// Search OpenAlex works, most cited first.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status or malformed JSON.
    pub async fn search_works(
        &self,
        query: &str,
        per_page: u32,
        year_filter: &str,
    ) -> ClientResult<WorksResponse> {
        let mut params = vec![
            ("search".to_string(), query.to_string()),
            ("filter".to_string(), year_filter.to_string()),
            ("sort".to_string(), "cited_by_count:desc".to_string()),
            ("per-page".to_string(), per_page.to_string()),
        ];

        if let Some(ref email) = self.contact_email {
            params.push(("mailto".to_string(), email.clone()));
        }

        self.get(&self.paper_api_url, &params).await
    }

    /// Free-text Open Library search.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status or malformed JSON.
    pub async fn search_books(&self, query: &str, limit: u32) -> ClientResult<BookSearchResponse> {
        let params = vec![
            ("q".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        self.get(&self.book_api_url, &params).await
    }

    /// Browse Open Library by subject, most editions first.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status or malformed JSON.
    pub async fn browse_subject(
        &self,
        subject: &str,
        limit: u32,
    ) -> ClientResult<BookSearchResponse> {
        let params = vec![
            ("q".to_string(), format!("subject:{subject}")),
            ("limit".to_string(), limit.to_string()),
            ("sort".to_string(), "editions".to_string()),
        ];

        self.get(&self.book_api_url, &params).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).query(params).send().await?;
        let response = self.handle_response(response).await?;

        // Decode straight from the body so map key order survives
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for DiscoveryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryClient")
            .field("paper_api_url", &self.paper_api_url)
            .field("book_api_url", &self.book_api_url)
            .field("has_contact_email", &self.has_contact_email())
            .finish()
    }
}
