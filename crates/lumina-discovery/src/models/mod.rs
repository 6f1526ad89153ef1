//! Data models for papers, books, unified results and the topic graph.
//!
//! Wire types (`Work`, `BookDoc`) mirror the upstream JSON with every field
//! optional; domain types (`Paper`, `Book`) are what the pipeline passes on.

mod author;
mod book;
mod enums;
mod filter;
mod lenient;
mod paper;
mod result;
mod topic;

pub use author::{Author, author_names};
pub use book::{Book, BookDoc, BookSearchResponse, DocMapping};
pub use enums::{CoverSize, ResourceType, ResponseFormat};
pub use filter::{KindFilter, ResultFilter};
pub use paper::{
    Authorship, DehydratedAuthor, InvertedIndex, Location, LocationSource, OpenAccess, Paper,
    Work, WorkTopic, WorksResponse, reconstruct_abstract,
};
pub use result::UnifiedResult;
pub use topic::{TopicData, TopicLink, TopicNode};
