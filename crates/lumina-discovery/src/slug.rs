//! Shareable URL slugs for results.

use std::sync::LazyLock;

use regex::Regex;

/// Characters of the title kept in a slug.
pub const TITLE_SLUG_CHARS: usize = 50;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid slug character class"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("valid hyphen pattern"));
static SLUG_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+)-([a-z0-9]+)$").expect("valid slug tail pattern"));

/// A slug split back into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSlug {
    /// Trailing ID segment.
    pub id: String,
    /// Title words, hyphens turned back into spaces.
    pub title: String,
}

/// Build `{title-slug}-{id}`, with the title part capped at 50 characters.
#[must_use]
pub fn generate_slug(id: &str, title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    let title_slug: String = collapsed.trim().chars().take(TITLE_SLUG_CHARS).collect();

    format!("{title_slug}-{id}")
}

/// Split a slug into its ID and title. `None` for empty or unmatched input.
#[must_use]
pub fn parse_slug(slug: &str) -> Option<ParsedSlug> {
    let captures = SLUG_TAIL.captures(slug)?;
    Some(ParsedSlug { id: captures[2].to_string(), title: captures[1].replace('-', " ") })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slug() {
        assert_eq!(generate_slug("W123", "Attention Is All You Need!"), "attention-is-all-you-need-W123");
    }

    #[test]
    fn test_generate_slug_collapses_separators() {
        assert_eq!(generate_slug("42", "Rust  --  the   Book"), "rust-the-book-42");
    }

    #[test]
    fn test_generate_slug_caps_title() {
        let slug = generate_slug("id", &"a".repeat(80));
        assert_eq!(slug, format!("{}-id", "a".repeat(50)));
    }

    #[test]
    fn test_generate_slug_keeps_source_id_verbatim() {
        let slug = generate_slug("/works/OL45804W", "Cosmos");
        assert_eq!(slug, "cosmos-/works/OL45804W");
    }

    #[test]
    fn test_parse_slug() {
        let parsed = parse_slug("deep-residual-learning-w2194775991").unwrap();
        assert_eq!(parsed.id, "w2194775991");
        assert_eq!(parsed.title, "deep residual learning");
    }

    #[test]
    fn test_parse_slug_rejects_bad_input() {
        assert!(parse_slug("").is_none());
        assert!(parse_slug("nohyphen").is_none());
        assert!(parse_slug("title-").is_none());
    }
}
