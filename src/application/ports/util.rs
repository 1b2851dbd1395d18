// src/application/ports/util.rs

/// Turns an arbitrary title into a URL slug.
///
/// Must be deterministic, and slugging a slug returns it unchanged.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, title: &str) -> String;
}
