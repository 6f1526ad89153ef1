//! Book data model and the Open Library search schema it is mapped from.

use serde::{Deserialize, Serialize};

use super::lenient::skip_invalid;
use super::{Author, CoverSize};
use crate::config::{api, limits};

/// A book, normalized from an Open Library search document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Open Library work key (e.g. `/works/OL45804W`).
    pub id: String,

    /// Book title.
    pub title: String,

    /// List of authors (names only).
    #[serde(default)]
    pub authors: Vec<Author>,

    /// First publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// First listed publisher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Number of editions.
    #[serde(default)]
    pub edition_count: u32,

    /// Cover image ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<u64>,

    /// Subject labels (at most three).
    #[serde(default)]
    pub subjects: Vec<String>,

    /// Average rating in `[0, 5]`, one decimal place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Book {
    /// Cover image URL for the given size, if the book has a cover.
    #[must_use]
    pub fn cover_url(&self, size: CoverSize) -> Option<String> {
        self.cover_id
            .map(|id| format!("{}/{}-{}.jpg", api::OPENLIBRARY_COVERS, id, size.suffix()))
    }
}

/// Open Library `search.json` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookSearchResponse {
    /// Matching documents; records that fail to decode are dropped.
    #[serde(default, deserialize_with = "skip_invalid")]
    pub docs: Vec<BookDoc>,
}

/// A single Open Library search document. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookDoc {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub author_name: Option<Vec<String>>,

    #[serde(default)]
    pub first_publish_year: Option<i32>,

    #[serde(default)]
    pub publisher: Option<Vec<String>>,

    #[serde(default)]
    pub edition_count: Option<u32>,

    #[serde(default)]
    pub cover_i: Option<u64>,

    #[serde(default)]
    pub subject: Option<Vec<String>>,

    #[serde(default)]
    pub ratings_average: Option<f64>,
}

/// Which request a document came from; they differ only in the edition fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocMapping {
    /// Free-text search: a missing edition count is 0.
    Search,
    /// Featured subject browse: a missing or zero edition count is 1.
    Featured,
}

impl BookDoc {
    /// Map the wire record into a [`Book`].
    #[must_use]
    pub fn into_book(self, mapping: DocMapping) -> Book {
        let edition_count = match mapping {
            DocMapping::Search => self.edition_count.unwrap_or(0),
            DocMapping::Featured => self.edition_count.filter(|&n| n > 0).unwrap_or(1),
        };

        Book {
            id: self.key.unwrap_or_default(),
            title: self.title.unwrap_or_else(|| "Untitled".to_string()),
            authors: self.author_name.unwrap_or_default().into_iter().map(Author::named).collect(),
            year: self.first_publish_year,
            publisher: self.publisher.and_then(|p| p.into_iter().next()),
            edition_count,
            cover_id: self.cover_i,
            subjects: self
                .subject
                .unwrap_or_default()
                .into_iter()
                .take(limits::TAGS_PER_RECORD)
                .collect(),
            rating: self.ratings_average.and_then(round_rating),
        }
    }
}

/// Round to one decimal place; zero and non-finite averages mean "unrated".
fn round_rating(average: f64) -> Option<f64> {
    (average.is_finite() && average != 0.0).then(|| (average * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_doc() -> BookDoc {
        serde_json::from_value(serde_json::json!({
            "key": "/works/OL45804W",
            "title": "Cosmos",
            "author_name": ["Carl Sagan"],
            "first_publish_year": 1980,
            "publisher": ["Random House", "Ballantine"],
            "edition_count": 87,
            "cover_i": 8_231_856,
            "subject": ["Astronomy", "Cosmology", "Science", "Popular works"],
            "ratings_average": 4.276
        }))
        .unwrap()
    }

    #[test]
    fn test_doc_into_book_full() {
        let book = full_doc().into_book(DocMapping::Search);
        assert_eq!(book.id, "/works/OL45804W");
        assert_eq!(book.title, "Cosmos");
        assert_eq!(book.authors, vec![Author::named("Carl Sagan")]);
        assert_eq!(book.year, Some(1980));
        assert_eq!(book.publisher.as_deref(), Some("Random House"));
        assert_eq!(book.edition_count, 87);
        assert_eq!(book.cover_id, Some(8_231_856));
        assert_eq!(book.subjects, vec!["Astronomy", "Cosmology", "Science"]);
        assert_eq!(book.rating, Some(4.3));
    }

    #[test]
    fn test_doc_minimal_search_mapping() {
        let book = BookDoc::default().into_book(DocMapping::Search);
        assert_eq!(book.edition_count, 0);
        assert_eq!(book.title, "Untitled");
        assert!(book.authors.is_empty());
        assert!(book.publisher.is_none());
        assert!(book.rating.is_none());
    }

    #[test]
    fn test_featured_mapping_defaults_editions_to_one() {
        assert_eq!(BookDoc::default().into_book(DocMapping::Featured).edition_count, 1);

        let zero = BookDoc { edition_count: Some(0), ..Default::default() };
        assert_eq!(zero.into_book(DocMapping::Featured).edition_count, 1);

        let many = BookDoc { edition_count: Some(12), ..Default::default() };
        assert_eq!(many.into_book(DocMapping::Featured).edition_count, 12);
    }

    #[test]
    fn test_zero_rating_is_unrated() {
        let doc = BookDoc { ratings_average: Some(0.0), ..Default::default() };
        assert!(doc.into_book(DocMapping::Search).rating.is_none());
    }

    #[test]
    fn test_search_response_skips_malformed_docs() {
        let json = r#"{"docs": [
            {"key": "/works/OL1W", "edition_count": 4},
            {"key": "/works/OL2W", "cover_i": 1.5},
            {"key": "/works/OL3W", "edition_count": 99999999999},
            {"key": "/works/OL4W", "ratings_average": "high"},
            {"key": "/works/OL5W"}
        ]}"#;

        let response: BookSearchResponse = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = response.docs.iter().filter_map(|d| d.key.as_deref()).collect();
        assert_eq!(keys, ["/works/OL1W", "/works/OL5W"]);
    }

    #[test]
    fn test_cover_url() {
        let book = full_doc().into_book(DocMapping::Search);
        assert_eq!(
            book.cover_url(CoverSize::Medium).as_deref(),
            Some("https://covers.openlibrary.org/b/id/8231856-M.jpg")
        );
        assert_eq!(
            book.cover_url(CoverSize::Large).as_deref(),
            Some("https://covers.openlibrary.org/b/id/8231856-L.jpg")
        );
        assert!(Book::default().cover_url(CoverSize::Medium).is_none());
    }
}
