// src/domain/content/services/slug.rs
use regex::Regex;
use std::sync::LazyLock;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug regex"));

/// Turn a title into a URL-safe slug.
///
/// Lower-cases, drops everything outside `[a-z0-9]`, whitespace and `-`, then
/// folds separator runs into one hyphen and trims hyphens from both ends.
/// The output always passes [`is_valid_slug`] unless it is empty.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}

pub fn is_valid_slug(value: &str) -> bool {
    SLUG_RE.is_match(value)
}
