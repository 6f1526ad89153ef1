//! Author data model shared by papers and books.

use serde::{Deserialize, Serialize};

/// An author attached to a paper or book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Source-specific author ID (papers only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    pub name: String,
}

impl Author {
    /// Create an author with a name only.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into() }
    }
}

/// Join author names as a comma-separated string.
#[must_use]
pub fn author_names(authors: &[Author]) -> String {
    authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")
}
