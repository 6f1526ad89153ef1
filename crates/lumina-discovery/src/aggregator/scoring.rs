//! Weighted quality scores.
//!
//! Scores are exposed on every result but do not drive ordering; see
//! [`super::interleave`] for the order actually applied.

use crate::models::{Book, Paper};

/// Weight per citation.
pub const CITATION_WEIGHT: f64 = 0.5;

/// Bonus for papers published after [`RECENT_PAPER_YEAR`].
pub const RECENT_PAPER_BONUS: f64 = 50.0;

/// Papers newer than this year get the recency bonus.
pub const RECENT_PAPER_YEAR: i32 = 2020;

/// Weight per edition.
pub const EDITION_WEIGHT: f64 = 10.0;

/// Bonus for books first published after [`RECENT_BOOK_YEAR`].
pub const RECENT_BOOK_BONUS: f64 = 20.0;

/// Books newer than this year get the recency bonus.
pub const RECENT_BOOK_YEAR: i32 = 2000;

/// `citations * 0.5 + (year > 2020 ? 50 : 0)`. An unknown year earns no bonus.
#[must_use]
pub fn paper_score(paper: &Paper) -> f64 {
    let bonus = if paper.year.is_some_and(|y| y > RECENT_PAPER_YEAR) { RECENT_PAPER_BONUS } else { 0.0 };
    f64::from(paper.citation_count) * CITATION_WEIGHT + bonus
}

/// `editions * 10 + (year > 2000 ? 20 : 0)`. An unknown year earns no bonus.
#[must_use]
pub fn book_score(book: &Book) -> f64 {
    let bonus = if book.year.is_some_and(|y| y > RECENT_BOOK_YEAR) { RECENT_BOOK_BONUS } else { 0.0 };
    f64::from(book.edition_count) * EDITION_WEIGHT + bonus
}
