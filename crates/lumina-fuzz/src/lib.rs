//! Fuzzing library for lumina-discovery.
//!
//! Targets decode arbitrary bytes as OpenAlex and Open Library responses
//! and run the record mapping on whatever decodes.
//!
//! # Usage
//!
//! ```bash
//! cd crates/lumina-fuzz
//! cargo +nightly fuzz run fuzz_work_parse -- -max_total_time=60
//! ```

pub use lumina_discovery::models;
