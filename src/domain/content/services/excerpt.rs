// src/domain/content/services/excerpt.rs
//! Plain-text excerpts from HTML bodies.
//!
//! Tag removal is the naive `<[^>]*>` strip: entities are left encoded and
//! malformed markup is handled best-effort only.

use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_EXCERPT_LENGTH: usize = 160;

const ELLIPSIS: &str = "...";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Remove tags, collapse whitespace and trim.
pub fn strip_html(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, "");
    WHITESPACE_RE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

/// Summarise `html` as at most `max_length` characters of plain text.
///
/// Over-long text keeps its first `max_length - 3` characters followed by
/// `...`; the cut does not look for word boundaries.
pub fn generate_excerpt(html: &str, max_length: usize) -> String {
    let text = strip_html(html);
    if text.chars().count() <= max_length {
        return text;
    }

    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut excerpt: String = text.chars().take(keep).collect();
    excerpt.push_str(ELLIPSIS);
    excerpt
}
