//! Property-based tests for ranking, interleaving and the topic graph.

use proptest::prelude::*;

use lumina_discovery::aggregator::{interleave, rank_and_interleave};
use lumina_discovery::graph::{MAX_LINKS, generate_topic_data};
use lumina_discovery::models::{Book, InvertedIndex, Paper, UnifiedResult};
use lumina_discovery::slug::{generate_slug, parse_slug};

fn arb_paper() -> impl Strategy<Value = Paper> {
    (
        "[a-z0-9]{1,8}",                                       // id
        0u32..10_000,                                          // citation_count
        proptest::collection::vec("[A-Da-d]{1,3}", 0..6),      // topics
    )
        .prop_map(|(id, citation_count, topics)| Paper {
            id,
            citation_count,
            topics,
            ..Default::default()
        })
}

fn arb_book() -> impl Strategy<Value = Book> {
    (
        "[a-z0-9]{1,8}",                                       // id
        0u32..500,                                             // edition_count
        proptest::collection::vec("[A-Da-d]{1,3}", 0..6),      // subjects
    )
        .prop_map(|(id, edition_count, subjects)| Book {
            id,
            edition_count,
            subjects,
            ..Default::default()
        })
}

fn arb_results() -> impl Strategy<Value = Vec<UnifiedResult>> {
    (proptest::collection::vec(arb_paper(), 0..15), proptest::collection::vec(arb_book(), 0..15))
        .prop_map(|(papers, books)| interleave(papers, books))
}

/// Reference walk: two papers then one book per round.
fn expected_pattern(papers: usize, books: usize) -> Vec<bool> {
    let (mut p, mut b) = (0, 0);
    let mut out = Vec::new();
    while p < papers || b < books {
        for _ in 0..2 {
            if p < papers {
                out.push(true);
                p += 1;
            }
        }
        if b < books {
            out.push(false);
            b += 1;
        }
    }
    out
}

proptest! {
    /// Interleaving follows the 2:1 pattern and keeps each list's order.
    #[test]
    fn interleave_follows_pattern(
        papers in proptest::collection::vec(arb_paper(), 0..20),
        books in proptest::collection::vec(arb_book(), 0..20),
    ) {
        let mixed = interleave(papers.clone(), books.clone());

        let pattern: Vec<bool> = mixed.iter().map(|r| r.as_paper().is_some()).collect();
        prop_assert_eq!(pattern, expected_pattern(papers.len(), books.len()));

        let mixed_papers: Vec<&Paper> = mixed.iter().filter_map(UnifiedResult::as_paper).collect();
        let mixed_books: Vec<&Book> = mixed.iter().filter_map(UnifiedResult::as_book).collect();
        prop_assert_eq!(mixed_papers, papers.iter().collect::<Vec<_>>());
        prop_assert_eq!(mixed_books, books.iter().collect::<Vec<_>>());
    }

    /// Ranking sorts each kind by its raw count and loses nothing.
    #[test]
    fn ranking_sorts_each_kind(
        papers in proptest::collection::vec(arb_paper(), 0..20),
        books in proptest::collection::vec(arb_book(), 0..20),
    ) {
        let total = papers.len() + books.len();
        let ranked = rank_and_interleave(papers, books);
        prop_assert_eq!(ranked.len(), total);

        let citations: Vec<u32> =
            ranked.iter().filter_map(UnifiedResult::as_paper).map(|p| p.citation_count).collect();
        let editions: Vec<u32> =
            ranked.iter().filter_map(UnifiedResult::as_book).map(|b| b.edition_count).collect();

        prop_assert!(citations.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(editions.windows(2).all(|w| w[0] >= w[1]));
    }

    /// The graph is a pure function of its input and never exceeds the link cap.
    #[test]
    fn graph_is_deterministic_and_capped(results in arb_results()) {
        let first = generate_topic_data(&results);
        let second = generate_topic_data(&results);

        prop_assert!(first.links.len() <= MAX_LINKS);
        prop_assert_eq!(&first, &second);

        for link in &first.links {
            prop_assert!(first.node(&link.source).is_some());
            prop_assert!(first.node(&link.target).is_some());
        }
    }

    /// Node ids are unique and every node weight is odd and at least 5.
    #[test]
    fn graph_nodes_unique(results in arb_results()) {
        let data = generate_topic_data(&results);
        let mut ids: Vec<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        prop_assert_eq!(ids.len(), data.nodes.len());
        prop_assert!(data.nodes.iter().all(|n| n.val >= 5 && n.val % 2 == 1));
    }

    /// Abstract reconstruction never panics on arbitrary positions.
    #[test]
    fn preview_never_panics(
        entries in proptest::collection::vec(
            ("[a-z]{0,8}", proptest::collection::vec(0usize..100_000, 0..5)),
            0..20,
        ),
    ) {
        let index = InvertedIndex::from_entries(entries);
        let preview = index.preview(200);
        prop_assert!(preview.chars().count() <= 200);
    }

    /// A generated slug always parses back to the alphanumeric ID it ends with.
    #[test]
    fn slug_tail_is_id(id in "[A-Za-z0-9]{1,12}", title in "[A-Za-z ]{1,80}") {
        let slug = generate_slug(&id, &title);
        let parsed = parse_slug(&slug);
        prop_assert!(parsed.is_some());
        prop_assert_eq!(parsed.map(|p| p.id), Some(id));
    }
}
