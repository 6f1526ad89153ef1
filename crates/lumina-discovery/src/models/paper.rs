//! Paper data model and the OpenAlex works schema it is mapped from.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use super::Author;
use super::lenient::skip_invalid;
use crate::config::limits;

/// A scholarly paper, normalized from an OpenAlex work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// OpenAlex work ID (e.g. `https://openalex.org/W2741809807`).
    pub id: String,

    /// Paper title.
    pub title: String,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Abstract preview reconstructed from the inverted index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: u32,

    /// Whether this paper is open access.
    #[serde(default)]
    pub is_open_access: bool,

    /// Journal or venue of the primary location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,

    /// Topic labels (at most three).
    #[serde(default)]
    pub topics: Vec<String>,

    /// Open access URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,

    /// DOI as a resolver URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

/// OpenAlex `/works` search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorksResponse {
    /// Works in this page; records that fail to decode are dropped.
    #[serde(default, deserialize_with = "skip_invalid")]
    pub results: Vec<Work>,
}

/// A single OpenAlex work. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub authorships: Option<Vec<Authorship>>,

    #[serde(default)]
    pub publication_year: Option<i32>,

    #[serde(default)]
    pub abstract_inverted_index: Option<InvertedIndex>,

    #[serde(default)]
    pub cited_by_count: Option<u32>,

    #[serde(default)]
    pub open_access: Option<OpenAccess>,

    #[serde(default)]
    pub primary_location: Option<Location>,

    #[serde(default)]
    pub topics: Option<Vec<WorkTopic>>,

    #[serde(default)]
    pub doi: Option<String>,
}

/// Authorship entry of a work.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Authorship {
    #[serde(default)]
    pub author: Option<DehydratedAuthor>,
}

/// Author reference inside an authorship.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DehydratedAuthor {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,
}

/// Open access status of a work.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenAccess {
    #[serde(default)]
    pub is_oa: Option<bool>,

    #[serde(default)]
    pub oa_url: Option<String>,
}

/// Primary hosting location of a work.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub source: Option<LocationSource>,
}

/// Journal, repository or conference hosting a work.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationSource {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Topic classification of a work.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkTopic {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Work {
    /// Map the wire record into a [`Paper`].
    #[must_use]
    pub fn into_paper(self) -> Paper {
        let authors = self
            .authorships
            .unwrap_or_default()
            .into_iter()
            .filter_map(|a| a.author)
            .filter_map(|a| Some(Author { name: a.display_name?, id: a.id }))
            .collect();

        let (is_open_access, pdf_url) = self
            .open_access
            .map(|oa| (oa.is_oa.unwrap_or(false), oa.oa_url))
            .unwrap_or((false, None));

        let topics = self
            .topics
            .unwrap_or_default()
            .into_iter()
            .take(limits::TAGS_PER_RECORD)
            .filter_map(|t| t.display_name)
            .collect();

        Paper {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_else(|| "Untitled".to_string()),
            authors,
            year: self.publication_year,
            r#abstract: self.abstract_inverted_index.as_ref().map(reconstruct_abstract),
            citation_count: self.cited_by_count.unwrap_or(0),
            is_open_access,
            journal: self.primary_location.and_then(|l| l.source).and_then(|s| s.display_name),
            topics,
            pdf_url,
            doi: self.doi,
        }
    }
}

/// Word to position-list encoding of a text body, in document key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex(Vec<(String, Vec<usize>)>);

impl InvertedIndex {
    /// Build an index from `(word, positions)` entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<usize>)>,
        S: Into<String>,
    {
        Self(entries.into_iter().map(|(w, p)| (w.into(), p)).collect())
    }

    /// Check whether the index holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rebuild linear text and keep the first `max_chars` characters.
    ///
    /// Each word is written to every position it lists; a later entry
    /// overwrites an earlier one at the same position. Unclaimed positions
    /// become empty words.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        // Position p starts at character p or later, so slots past the
        // window never reach the kept prefix.
        let slots = self
            .0
            .iter()
            .flat_map(|(_, positions)| positions.iter().copied())
            .max()
            .map_or(0, |max| max.min(max_chars) + 1);

        let mut words = vec![""; slots];
        for (word, positions) in &self.0 {
            for &pos in positions {
                if let Some(slot) = words.get_mut(pos) {
                    *slot = word;
                }
            }
        }

        words.join(" ").chars().take(max_chars).collect()
    }
}

/// Reconstruct an abstract preview; the ellipsis is always appended.
#[must_use]
pub fn reconstruct_abstract(index: &InvertedIndex) -> String {
    format!("{}...", index.preview(limits::ABSTRACT_PREVIEW_CHARS))
}

impl<'de> Deserialize<'de> for InvertedIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = InvertedIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of words to position lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((word, positions)) = map.next_entry::<String, serde_json::Value>()? {
                    // Non-integer positions are dropped rather than failing the work
                    let positions = positions
                        .as_array()
                        .map(|list| {
                            list.iter()
                                .filter_map(serde_json::Value::as_u64)
                                .filter_map(|p| usize::try_from(p).ok())
                                .collect()
                        })
                        .unwrap_or_default();
                    entries.push((word, positions));
                }
                Ok(InvertedIndex(entries))
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}
