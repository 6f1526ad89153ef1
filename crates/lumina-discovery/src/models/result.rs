//! Unified result: the tagged union every downstream consumer branches on.

use serde::{Deserialize, Serialize};

use super::{Author, Book, Paper, ResourceType};
use crate::aggregator::scoring;

/// A paper or a book, discriminated by the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UnifiedResult {
    /// Scholarly paper.
    Paper(Paper),
    /// Book.
    Book(Book),
}

impl UnifiedResult {
    /// Variant tag.
    #[must_use]
    pub const fn resource_type(&self) -> ResourceType {
        match self {
            Self::Paper(_) => ResourceType::Paper,
            Self::Book(_) => ResourceType::Book,
        }
    }

    /// Source identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Paper(p) => &p.id,
            Self::Book(b) => &b.id,
        }
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Paper(p) => &p.title,
            Self::Book(b) => &b.title,
        }
    }

    /// Publication year, if known.
    #[must_use]
    pub const fn year(&self) -> Option<i32> {
        match self {
            Self::Paper(p) => p.year,
            Self::Book(b) => b.year,
        }
    }

    /// Authors.
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        match self {
            Self::Paper(p) => &p.authors,
            Self::Book(b) => &b.authors,
        }
    }

    /// Topic tags: `topics` for papers, `subjects` for books.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Paper(p) => &p.topics,
            Self::Book(b) => &b.subjects,
        }
    }

    /// Weighted quality score. Not used for ordering.
    #[must_use]
    pub fn score(&self) -> f64 {
        match self {
            Self::Paper(p) => scoring::paper_score(p),
            Self::Book(b) => scoring::book_score(b),
        }
    }

    /// Borrow the paper, if this is one.
    #[must_use]
    pub const fn as_paper(&self) -> Option<&Paper> {
        match self {
            Self::Paper(p) => Some(p),
            Self::Book(_) => None,
        }
    }

    /// Borrow the book, if this is one.
    #[must_use]
    pub const fn as_book(&self) -> Option<&Book> {
        match self {
            Self::Book(b) => Some(b),
            Self::Paper(_) => None,
        }
    }
}

impl From<Paper> for UnifiedResult {
    fn from(paper: Paper) -> Self {
        Self::Paper(paper)
    }
}

impl From<Book> for UnifiedResult {
    fn from(book: Book) -> Self {
        Self::Book(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_carries_type_tag() {
        let paper = UnifiedResult::from(Paper { id: "W1".into(), title: "P".into(), ..Default::default() });
        let json = serde_json::to_value(&paper).unwrap();
        assert_eq!(json["type"], "paper");
        assert_eq!(json["id"], "W1");

        let book = UnifiedResult::from(Book { id: "/works/OL1W".into(), ..Default::default() });
        assert_eq!(serde_json::to_value(&book).unwrap()["type"], "book");
    }

    #[test]
    fn test_deserialize_by_type_tag() {
        let json = serde_json::json!({"type": "book", "id": "/works/OL2W", "title": "B", "editionCount": 4});
        let result: UnifiedResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.resource_type(), ResourceType::Book);
        assert_eq!(result.as_book().map(|b| b.edition_count), Some(4));
        assert!(result.as_paper().is_none());
    }

    #[test]
    fn test_tags_follow_variant() {
        let paper = UnifiedResult::from(Paper { topics: vec!["AI".into()], ..Default::default() });
        let book = UnifiedResult::from(Book { subjects: vec!["History".into()], ..Default::default() });
        assert_eq!(paper.tags(), ["AI".to_string()]);
        assert_eq!(book.tags(), ["History".to_string()]);
    }
}
