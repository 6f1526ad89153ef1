//! Enumeration types shared across the pipeline and the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Variant tag carried by every unified result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Scholarly paper from OpenAlex.
    Paper,
    /// Book from Open Library.
    Book,
}

impl ResourceType {
    /// Lowercase tag as used in URLs and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Book => "book",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

impl ResponseFormat {
    /// Check if this is JSON format.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Cover image size served by Open Library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoverSize {
    /// Card-sized thumbnail (`M`).
    #[default]
    Medium,
    /// Detail-page image (`L`).
    Large,
}

impl CoverSize {
    /// Size suffix used in the cover URL.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_serde() {
        assert_eq!(serde_json::to_string(&ResourceType::Paper).unwrap(), "\"paper\"");
        let parsed: ResourceType = serde_json::from_str("\"book\"").unwrap();
        assert_eq!(parsed, ResourceType::Book);
        assert_eq!(ResourceType::Book.to_string(), "book");
    }

    #[test]
    fn test_cover_size_suffix() {
        assert_eq!(CoverSize::Medium.suffix(), "M");
        assert_eq!(CoverSize::Large.suffix(), "L");
    }
}
