// src/checker/markdown.rs
// =============================================================================
// This module extracts link targets from Markdown text.
//
// There is no Markdown parser here, only regular expressions:
// 1. At every '[' try HTTPS_LINK first, then ANCHOR_LINK, to find whole
//    links: [label](https://...) or [label](#...)
// 2. TARGET pulls "(...)" targets back out of the matched link text
//
// The https form always wins at a given '[', even when the anchor form would
// give a longer match. A single alternation regex can't be relied on for
// that, so the two forms are separate patterns tried in order.
//
// The second pass runs over ALL matched links glued together, not over each
// link on its own. Because `.+` in the label is greedy, a single match can
// cover several links on one line (and any "(https://...)" text between
// them), and the second pass splits it up again.
//
// Rust concepts:
// - LazyLock: Compile each regex once, on first use
// - Newtypes: LinkTarget wraps a String so it can't be mixed up with URLs
// =============================================================================

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

// [non-empty label](https://rest), rest has no ')', anchored at a '['
static HTTPS_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[.+\]\(https://[^)]+\)").expect("HTTPS_LINK pattern is valid")
});

// [non-empty label](#rest), rest has no ')', anchored at a '['
static ANCHOR_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[.+\]\(#[^)]+\)").expect("ANCHOR_LINK pattern is valid")
});

// (#rest) or (https://rest), rest has no ')'
static TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(#[^)]+\)|\(https://[^)]+\)").expect("TARGET pattern is valid")
});

/// The text between the parentheses of a markdown link.
///
/// Either an absolute `https://` URL or an anchor starting with `#`.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkTarget(String);

impl LinkTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Extracts all link targets from Markdown text
//
// Parameters:
//   markdown: the full text of one document
//
// Returns: targets in order of appearance in the concatenated link text
//
// Example input:
//   "See [Rust](https://www.rust-lang.org) and [below](#setup)"
//
// Example output:
//   [LinkTarget("https://www.rust-lang.org"), LinkTarget("#setup")]
pub fn extract_markdown_links(markdown: &str) -> Vec<LinkTarget> {
    let link_text: String = find_links(markdown).concat();

    TARGET
        .find_iter(&link_text)
        .map(|m| strip_parens(m.as_str()))
        .map(|target| LinkTarget(target.to_string()))
        .collect()
}

// Whole links, left to right, never overlapping
fn find_links(markdown: &str) -> Vec<&str> {
    let mut links = Vec::new();
    let mut resume = 0;

    for (start, _) in markdown.match_indices('[') {
        if start < resume {
            continue;
        }
        let rest = &markdown[start..];
        if let Some(m) = HTTPS_LINK.find(rest).or_else(|| ANCHOR_LINK.find(rest)) {
            links.push(m.as_str());
            resume = start + m.end();
        }
    }

    links
}

// "(https://x)" -> "https://x"
fn strip_parens(raw: &str) -> &str {
    let inner = raw.strip_prefix('(').unwrap_or(raw);
    inner.strip_suffix(')').unwrap_or(inner)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A value that is computed the first time it is used, then cached
//    - Regex::new is relatively expensive, so we only want to do it once
//    - It's safe to share between threads
//
// 2. Why expect() on Regex::new?
//    - The patterns are constants written in this file
//    - If one were invalid, that is a programmer error, not a user error
//    - The tests below exercise every pattern, so a typo fails the test run
//
// 3. What does find_iter do?
//    - Returns every non-overlapping match, left to right
//    - m.as_str() is the matched slice of the original text (no copying)
//
// 4. Why strip_prefix/strip_suffix?
//    - They return Option<&str>: Some(rest) if the prefix/suffix was there
//    - Safer than slicing with [1..len-1], which panics on short strings
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(markdown: &str) -> Vec<String> {
        extract_markdown_links(markdown)
            .into_iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_extract_simple_link() {
        assert_eq!(targets("[Home](https://example.com)"), vec!["https://example.com"]);
    }

    #[test]
    fn test_extract_anchor_link() {
        let found = extract_markdown_links("Jump to [setup](#setup-guide).");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_str(), "#setup-guide");
    }

    #[test]
    fn test_extract_multiple_links_in_order() {
        let markdown = r#"
# Resources

- [Rust](https://www.rust-lang.org)
- [Cargo](https://doc.rust-lang.org/cargo/)
- [Up top](#resources)
        "#;
        assert_eq!(
            targets(markdown),
            vec![
                "https://www.rust-lang.org",
                "https://doc.rust-lang.org/cargo/",
                "#resources",
            ]
        );
    }

    #[test]
    fn test_two_links_on_one_line() {
        let markdown = "[a](https://a.example) and [b](https://b.example)";
        assert_eq!(targets(markdown), vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_parenthesized_url_between_links_is_picked_up() {
        // The greedy label swallows the text between the two links, so the
        // bare "(https://...)" in the middle is re-extracted as a target too
        let markdown = "[a](#a) see (https://loose.example) [b](https://b.example)";
        assert_eq!(
            targets(markdown),
            vec!["#a", "https://loose.example", "https://b.example"]
        );
    }

    #[test]
    fn test_separate_matches_do_not_pick_up_loose_text() {
        // Here the https link comes first, so it is matched on its own and
        // the loose parenthetical is never part of the link text
        let markdown = "[a](https://a.example) see (https://loose.example) [b](#b)";
        assert_eq!(targets(markdown), vec!["https://a.example", "#b"]);
    }

    #[test]
    fn test_https_form_wins_at_same_bracket() {
        // From the first '[' the anchor form could reach all the way to "(#b)",
        // but the https form matches there too and is preferred
        let markdown = "[a](https://a.example) see (https://loose.example) [b](#b)";
        assert_eq!(
            find_links(markdown),
            vec!["[a](https://a.example)", "[b](#b)"]
        );
    }

    #[test]
    fn test_second_target_is_the_second_link() {
        // Loose text must not shift which link sits at index 1
        let markdown = "[one](https://one.example) (https://loose.example) [two](#two)\n";
        let found = extract_markdown_links(markdown);
        assert_eq!(found[1].as_str(), "#two");
    }

    #[test]
    fn test_target_stops_at_first_paren() {
        let markdown = "[wiki](https://en.wikipedia.org/wiki/Rust_(language))";
        assert_eq!(targets(markdown), vec!["https://en.wikipedia.org/wiki/Rust_(language"]);
    }

    #[test]
    fn test_skip_empty_label() {
        assert!(targets("[](https://example.com)").is_empty());
    }

    #[test]
    fn test_skip_non_https_links() {
        let markdown = r#"
[plain](http://example.com)
[email](mailto:test@example.com)
[docs](./docs/README.md)
[empty anchor](#)
        "#;
        assert!(targets(markdown).is_empty());
    }

    #[test]
    fn test_no_links() {
        assert!(targets("Just some prose, no links at all.").is_empty());
        assert!(targets("").is_empty());
    }

    #[test]
    fn test_strip_parens() {
        assert_eq!(strip_parens("(#a)"), "#a");
        assert_eq!(strip_parens("(https://x)"), "https://x");
    }
}
