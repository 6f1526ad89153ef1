//! Markdown output formatting.

use crate::models::{Book, CoverSize, Paper, TopicData, UnifiedResult, author_names};
use crate::slug::generate_slug;

/// Format a unified result list as Markdown.
#[must_use]
pub fn format_results_markdown(query: &str, results: &[&UnifiedResult]) -> String {
    if results.is_empty() {
        return format!("No results found for \"{query}\".");
    }

    let mut output = format!("# Results for \"{}\" ({} results)\n\n", query, results.len());

    for (i, result) in results.iter().enumerate() {
        let entry = match result {
            UnifiedResult::Paper(paper) => format_paper_markdown(paper, i + 1),
            UnifiedResult::Book(book) => format_book_markdown(book, i + 1),
        };
        output.push_str(&entry);
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper as Markdown.
#[must_use]
pub fn format_paper_markdown(paper: &Paper, index: usize) -> String {
    let mut output = format!("## {}. {} `paper`\n\n", index, paper.title);

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", author_names(&paper.authors)));
    }

    let mut meta = Vec::new();
    if let Some(year) = paper.year {
        meta.push(format!("**Year**: {year}"));
    }
    meta.push(format!("**Citations**: {}", paper.citation_count));
    if let Some(journal) = &paper.journal {
        meta.push(format!("**Journal**: {journal}"));
    }
    if paper.is_open_access {
        meta.push("**Open Access**".to_string());
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    if !paper.topics.is_empty() {
        output.push_str(&format!("**Topics**: {}\n\n", paper.topics.join(", ")));
    }

    if let Some(text) = &paper.r#abstract {
        output.push_str(&format!("> {text}\n\n"));
    }

    let mut links = Vec::new();
    if let Some(doi) = &paper.doi {
        links.push(format!("[DOI]({doi})"));
    }
    if let Some(pdf) = &paper.pdf_url {
        links.push(format!("[PDF]({pdf})"));
    }
    links.push(format!("`{}`", generate_slug(&paper.id, &paper.title)));
    output.push_str(&format!("{}\n", links.join(" | ")));

    output
}

/// Format a single book as Markdown.
#[must_use]
pub fn format_book_markdown(book: &Book, index: usize) -> String {
    let mut output = format!("## {}. {} `book`\n\n", index, book.title);

    if !book.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", author_names(&book.authors)));
    }

    let mut meta = Vec::new();
    if let Some(year) = book.year {
        meta.push(format!("**First published**: {year}"));
    }
    meta.push(format!("**Editions**: {}", book.edition_count));
    if let Some(publisher) = &book.publisher {
        meta.push(format!("**Publisher**: {publisher}"));
    }
    if let Some(rating) = book.rating {
        meta.push(format!("**Rating**: {rating:.1}/5"));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    if !book.subjects.is_empty() {
        output.push_str(&format!("**Subjects**: {}\n\n", book.subjects.join(", ")));
    }

    let mut links = Vec::new();
    if let Some(cover) = book.cover_url(CoverSize::Medium) {
        links.push(format!("[Cover]({cover})"));
    }
    links.push(format!("`{}`", generate_slug(&book.id, &book.title)));
    output.push_str(&format!("{}\n", links.join(" | ")));

    output
}

/// Format the featured shelf as Markdown.
#[must_use]
pub fn format_featured_markdown(subject: &str, books: &[Book], remaining: usize) -> String {
    if books.is_empty() {
        return format!("No featured books available for {subject}.");
    }

    let mut output = format!("# Featured: {subject}\n\n");
    for (i, book) in books.iter().enumerate() {
        output.push_str(&format_book_markdown(book, i + 1));
        output.push('\n');
    }
    if remaining > 0 {
        output.push_str(&format!("*{remaining} more available.*\n"));
    }
    output
}

/// Format a topic graph summary as Markdown.
#[must_use]
pub fn format_topics_markdown(data: &TopicData) -> String {
    if data.is_empty() {
        return "No topics.".to_string();
    }

    let mut nodes: Vec<_> = data.nodes.iter().collect();
    nodes.sort_by(|a, b| b.val.cmp(&a.val));

    let mut output = format!("## Topics ({} nodes, {} links)\n\n", data.nodes.len(), data.links.len());
    for node in nodes {
        output.push_str(&format!("- {} ({})\n", node.id, node.val));
    }
    output
}
