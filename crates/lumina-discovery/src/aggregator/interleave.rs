//! Ranking and interleaving of the two source lists.

use crate::models::{Book, Paper, UnifiedResult};

/// Papers taken per round.
pub const PAPERS_PER_ROUND: usize = 2;

/// Books taken per round.
pub const BOOKS_PER_ROUND: usize = 1;

/// Sort each list by its raw popularity count, then interleave.
///
/// Papers are ordered by citation count and books by edition count, both
/// descending. Sorting is stable, so ties keep upstream order.
#[must_use]
pub fn rank_and_interleave(mut papers: Vec<Paper>, mut books: Vec<Book>) -> Vec<UnifiedResult> {
    papers.sort_by(|a, b| b.citation_count.cmp(&a.citation_count));
    books.sort_by(|a, b| b.edition_count.cmp(&a.edition_count));
    interleave(papers, books)
}

/// Two papers, then one book, repeated until both lists are drained.
///
/// Once one list runs out the other keeps being appended in its own order.
/// No item is dropped or duplicated.
#[must_use]
pub fn interleave(papers: Vec<Paper>, books: Vec<Book>) -> Vec<UnifiedResult> {
    let mut mixed = Vec::with_capacity(papers.len() + books.len());
    let mut papers = papers.into_iter().peekable();
    let mut books = books.into_iter().peekable();

    while papers.peek().is_some() || books.peek().is_some() {
        mixed.extend(papers.by_ref().take(PAPERS_PER_ROUND).map(UnifiedResult::Paper));
        mixed.extend(books.by_ref().take(BOOKS_PER_ROUND).map(UnifiedResult::Book));
    }

    mixed
}
