//! Lumina discovery core
//!
//! Searches two external catalogs, OpenAlex (scholarly papers) and Open
//! Library (books), and merges their records into one ranked list together
//! with a topic co-occurrence graph.
//!
//! # Pipeline
//!
//! - **Sources**: one adapter per catalog maps the upstream schema into
//!   [`models::Paper`] / [`models::Book`] and degrades to an empty list on any failure
//! - **Aggregator**: queries both adapters concurrently, sorts each list by
//!   raw popularity and interleaves two papers per book
//! - **Graph**: derives topic nodes and co-occurrence links from the merged list
//! - **Session**: debounces input and discards responses to superseded queries
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lumina_discovery::{Aggregator, Config, DiscoveryClient, graph::generate_topic_data};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = Arc::new(DiscoveryClient::new(&config)?);
//!     let aggregator = Aggregator::from_client(client, &config);
//!
//!     let results = aggregator.search_resources("quantum computing").await;
//!     let topics = generate_topic_data(&results);
//!     println!("{} results, {} topics", results.len(), topics.nodes.len());
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod graph;
pub mod models;
pub mod session;
pub mod slug;
pub mod sources;

pub use aggregator::Aggregator;
pub use client::DiscoveryClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
