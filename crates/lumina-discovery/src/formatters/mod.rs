//! Output formatting for the CLI.

pub mod json;
pub mod markdown;

pub use json::{featured_json, result_json, search_json};
pub use markdown::{
    format_book_markdown, format_featured_markdown, format_paper_markdown,
    format_results_markdown, format_topics_markdown,
};
