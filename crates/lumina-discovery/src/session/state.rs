//! Search and landing-view state with a single owner.

use crate::graph::generate_topic_data;
use crate::models::{Book, ResultFilter, TopicData, UnifiedResult};
use crate::slug::generate_slug;

/// Featured books revealed per "explore more" step.
pub const FEATURED_PAGE: usize = 12;

/// Identifies one dispatched search. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    /// Sequence number.
    #[must_use]
    pub const fn seq(self) -> u64 {
        self.0
    }
}

/// Snapshot of everything the search view renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Text currently in the search box.
    pub query: String,

    /// Last accepted result set, in ranked order.
    pub results: Vec<UnifiedResult>,

    /// Topic graph of `results`.
    pub topic_data: TopicData,

    /// A search is in flight.
    pub is_loading: bool,

    /// At least one non-blank search has been dispatched since the last reset.
    pub has_searched: bool,

    /// Display filter.
    pub filter: ResultFilter,
}

impl SearchState {
    /// Results passing the current filter, in stored order.
    #[must_use]
    pub fn filtered_results(&self) -> Vec<&UnifiedResult> {
        self.filter.apply(&self.results)
    }

    /// Re-locate a result of the current set by its slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&UnifiedResult> {
        self.results.iter().find(|r| generate_slug(r.id(), r.title()) == slug)
    }
}

/// Owns [`SearchState`] and decides which responses are accepted.
///
/// Each dispatched search gets a fresh [`SearchTicket`]. A completion is
/// applied only if its ticket is the one most recently dispatched, so a
/// slow response can never overwrite a newer query's results.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchState,
    last_seq: u64,
    in_flight: Option<SearchTicket>,
}

impl SearchSession {
    /// Create a session in the "not searched" state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Record typed text without dispatching anything.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.state.query);
    }

    /// Start a search for `query`.
    ///
    /// A blank query resets to the "not searched" state, invalidates any
    /// in-flight search, and returns `None`: nothing should be fetched.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        self.set_query(query);

        if query.trim().is_empty() {
            self.reset_results();
            return None;
        }

        self.last_seq += 1;
        let ticket = SearchTicket(self.last_seq);
        self.in_flight = Some(ticket);
        self.state.is_loading = true;
        self.state.has_searched = true;

        tracing::debug!(seq = ticket.seq(), query, "Search dispatched");
        Some(ticket)
    }

    /// Check whether `ticket` is the search whose response would be accepted.
    #[must_use]
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.in_flight == Some(ticket)
    }

    /// Apply a completed search. Returns `false` if the response was stale.
    pub fn complete(&mut self, ticket: SearchTicket, results: Vec<UnifiedResult>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(seq = ticket.seq(), latest = self.last_seq, "Discarding stale response");
            return false;
        }

        self.state.topic_data = generate_topic_data(&results);
        self.state.results = results;
        self.state.is_loading = false;
        self.in_flight = None;
        true
    }

    /// Change the display filter.
    pub fn set_filter(&mut self, filter: ResultFilter) {
        self.state.filter = filter;
    }

    /// Return to the home view: empty query, no results.
    pub fn clear(&mut self) {
        self.state.query.clear();
        self.reset_results();
    }

    fn reset_results(&mut self) {
        self.in_flight = None;
        self.state.results.clear();
        self.state.topic_data = TopicData::default();
        self.state.is_loading = false;
        self.state.has_searched = false;
    }
}

/// Landing-view shelf of featured books revealed a page at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedShelf {
    books: Vec<Book>,
    visible: usize,
}

impl FeaturedShelf {
    /// Create a shelf showing the first page.
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self { books, visible: FEATURED_PAGE }
    }

    /// Books currently shown.
    #[must_use]
    pub fn visible_books(&self) -> &[Book] {
        &self.books[..self.visible.min(self.books.len())]
    }

    /// Number of books still hidden.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.books.len().saturating_sub(self.visible)
    }

    /// Check whether more books can be revealed.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.visible < self.books.len()
    }

    /// Reveal the next page, capped at the total.
    pub fn explore_more(&mut self) {
        self.visible = (self.visible + FEATURED_PAGE).min(self.books.len());
    }

    /// Look up a featured book by slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Book> {
        self.books.iter().find(|b| generate_slug(&b.id, &b.title) == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KindFilter, Paper};

    fn results(ids: &[&str]) -> Vec<UnifiedResult> {
        ids.iter()
            .map(|id| {
                Paper {
                    id: (*id).to_string(),
                    title: format!("Title {id}"),
                    topics: vec!["shared".into(), (*id).to_string()],
                    ..Default::default()
                }
                .into()
            })
            .collect()
    }

    #[test]
    fn test_begin_and_complete() {
        let mut session = SearchSession::new();
        let ticket = session.begin("rust").unwrap();
        assert!(session.state().is_loading);
        assert!(session.state().has_searched);

        assert!(session.complete(ticket, results(&["a", "b"])));
        let state = session.state();
        assert!(!state.is_loading);
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.topic_data.node("shared").map(|n| n.val), Some(7));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = SearchSession::new();
        let old = session.begin("ru").unwrap();
        let new = session.begin("rust").unwrap();
        assert!(new > old);

        assert!(session.complete(new, results(&["new"])));
        assert!(!session.complete(old, results(&["old"])));
        assert_eq!(session.state().results[0].id(), "new");
    }

    #[test]
    fn test_stale_response_before_newer_completes() {
        let mut session = SearchSession::new();
        let old = session.begin("ru").unwrap();
        let new = session.begin("rust").unwrap();

        assert!(!session.complete(old, results(&["old"])));
        assert!(session.state().results.is_empty());
        assert!(session.state().is_loading);
        assert!(session.complete(new, results(&["new"])));
    }

    #[test]
    fn test_blank_query_resets_and_invalidates() {
        let mut session = SearchSession::new();
        let first = session.begin("rust").unwrap();
        assert!(session.complete(first, results(&["a"])));

        let pending = session.begin("rust lang").unwrap();
        assert!(session.begin("   ").is_none());

        let state = session.state();
        assert!(!state.has_searched);
        assert!(!state.is_loading);
        assert!(state.results.is_empty());
        assert!(state.topic_data.is_empty());
        assert!(!session.complete(pending, results(&["late"])));
    }

    #[test]
    fn test_clear_resets_query() {
        let mut session = SearchSession::new();
        let ticket = session.begin("rust").unwrap();
        session.clear();
        assert_eq!(session.state(), &SearchState::default());
        assert!(!session.is_current(ticket));
    }

    #[test]
    fn test_find_by_slug_and_filter() {
        let mut session = SearchSession::new();
        let ticket = session.begin("rust").unwrap();
        session.complete(ticket, results(&["W1", "W2"]));

        let found = session.state().find_by_slug("title-w2-W2").map(UnifiedResult::id);
        assert_eq!(found, Some("W2"));
        assert!(session.state().find_by_slug("missing-W9").is_none());

        session.set_filter(ResultFilter::kind(KindFilter::Book));
        assert!(session.state().filtered_results().is_empty());
        assert_eq!(session.state().results.len(), 2);
    }

    fn shelf_of(n: usize) -> FeaturedShelf {
        FeaturedShelf::new(
            (0..n)
                .map(|i| Book { id: format!("/works/OL{i}W"), title: format!("Book {i}"), ..Default::default() })
                .collect(),
        )
    }

    #[test]
    fn test_featured_shelf_paging() {
        let mut shelf = shelf_of(24);
        assert_eq!(shelf.visible_books().len(), 12);
        assert_eq!(shelf.remaining(), 12);
        assert!(shelf.has_more());

        shelf.explore_more();
        assert_eq!(shelf.visible_books().len(), 24);
        assert_eq!(shelf.remaining(), 0);
        assert!(!shelf.has_more());

        shelf.explore_more();
        assert_eq!(shelf.visible_books().len(), 24);
    }

    #[test]
    fn test_featured_shelf_smaller_than_page() {
        let shelf = shelf_of(5);
        assert_eq!(shelf.visible_books().len(), 5);
        assert_eq!(shelf.remaining(), 0);
        assert!(!shelf.has_more());
        assert!(shelf.find_by_slug("book-3-/works/OL3W").is_some());
    }
}
