//! Client-side filtering of a result set.

use serde::{Deserialize, Serialize};

use super::{ResourceType, UnifiedResult};

/// Which variants to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    /// Papers and books.
    #[default]
    All,
    /// Papers only.
    Paper,
    /// Books only.
    Book,
}

impl KindFilter {
    /// Check whether a variant passes.
    #[must_use]
    pub const fn admits(self, kind: ResourceType) -> bool {
        matches!(
            (self, kind),
            (Self::All, _) | (Self::Paper, ResourceType::Paper) | (Self::Book, ResourceType::Book)
        )
    }
}

/// Filter applied to the displayed results. Never changes the stored order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFilter {
    /// Variant selection.
    #[serde(default)]
    pub kind: KindFilter,

    /// Drop results published before this year (or with no year).
    #[serde(default)]
    pub min_year: Option<i32>,

    /// Keep only open access papers. Books never qualify.
    #[serde(default)]
    pub open_access_only: bool,
}

impl ResultFilter {
    /// Filter selecting one variant.
    #[must_use]
    pub fn kind(kind: KindFilter) -> Self {
        Self { kind, ..Self::default() }
    }

    /// Check whether a result passes every criterion.
    #[must_use]
    pub fn matches(&self, result: &UnifiedResult) -> bool {
        if !self.kind.admits(result.resource_type()) {
            return false;
        }
        if let Some(min) = self.min_year {
            if result.year().is_none_or(|y| y < min) {
                return false;
            }
        }
        if self.open_access_only {
            return result.as_paper().is_some_and(|p| p.is_open_access);
        }
        true
    }

    /// Apply to a result slice, keeping order.
    #[must_use]
    pub fn apply<'a>(&self, results: &'a [UnifiedResult]) -> Vec<&'a UnifiedResult> {
        results.iter().filter(|r| self.matches(r)).collect()
    }
}
