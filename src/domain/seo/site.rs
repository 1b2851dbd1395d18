// src/domain/seo/site.rs
use crate::domain::content::ContentKind;

/// Site-wide values the metadata generators fall back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    base_url: String,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub default_image: Option<String>,
    pub twitter_handle: Option<String>,
    pub locale: String,
}

impl SiteSettings {
    pub fn new(base_url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            name: name.into(),
            description: String::new(),
            logo_url: None,
            default_image: None,
            twitter_handle: None,
            locale: "en_US".into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a site-relative path against the base URL; absolute URLs pass
    /// through untouched.
    pub fn absolute_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            return path_or_url.to_string();
        }
        let path = path_or_url.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Public URL of a record: `<base><prefix>/<slug>`.
    pub fn content_url(&self, kind: ContentKind, slug: &str) -> String {
        format!("{}{}/{slug}", self.base_url, kind.path_prefix())
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::new("http://localhost:3000", "Content Site")
    }
}
