// src/domain/seo/metadata.rs
use crate::domain::content::{ContentKind, ContentRecord};
use crate::domain::seo::site::SiteSettings;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialImage {
    pub url: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub og_type: &'static str,
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    pub images: Vec<SocialImage>,
    pub published_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: Option<String>,
}

/// Everything a page renderer needs for its `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub noindex: bool,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

pub fn page_metadata(record: &ContentRecord, site: &SiteSettings) -> PageMetadata {
    let title = display_title(record, site);
    let description = display_description(record, site);
    let url = site.content_url(record.kind, &record.slug);
    let canonical_url = record
        .canonical_url()
        .map_or_else(|| url.clone(), str::to_string);

    let keywords = if record.meta_keywords.iter().any(|k| !k.trim().is_empty()) {
        record.meta_keywords.clone()
    } else {
        record.tags.clone()
    };

    let images: Vec<SocialImage> = share_image(record, site).into_iter().collect();
    let authors = if record.author.trim().is_empty() {
        Vec::new()
    } else {
        vec![record.author.clone()]
    };

    let open_graph = OpenGraph {
        og_type: match record.kind {
            ContentKind::Page => "website",
            ContentKind::Post | ContentKind::Course => "article",
        },
        title: title.clone(),
        description: description.clone(),
        url,
        site_name: site.name.clone(),
        locale: site.locale.clone(),
        images: images.clone(),
        published_time: record.published_at,
        modified_time: record.updated_at.or(record.published_at),
        authors,
        tags: record.tags.clone(),
    };

    let twitter = TwitterCard {
        card: "summary_large_image",
        title: title.clone(),
        description: description.clone(),
        images: images.into_iter().map(|image| image.url).collect(),
        creator: site.twitter_handle.clone(),
    };

    PageMetadata {
        title,
        description,
        keywords,
        canonical_url,
        noindex: !record.is_published(),
        open_graph,
        twitter,
    }
}

/// Meta title, then the record title, then the site name.
pub(crate) fn display_title(record: &ContentRecord, site: &SiteSettings) -> String {
    record
        .meta_title()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| Some(record.title.trim()).filter(|t| !t.is_empty()))
        .map_or_else(|| site.name.clone(), str::to_string)
}

/// Meta description, then the excerpt, then the site description.
pub(crate) fn display_description(record: &ContentRecord, site: &SiteSettings) -> String {
    record
        .meta_description()
        .or_else(|| Some(record.excerpt.as_str()).filter(|e| !e.trim().is_empty()))
        .map_or_else(|| site.description.clone(), str::to_string)
}

/// Cover image resolved against the site, falling back to the site default.
pub(crate) fn share_image(record: &ContentRecord, site: &SiteSettings) -> Option<SocialImage> {
    if let Some(cover) = record.cover_url() {
        let alt = record
            .cover_image
            .as_ref()
            .and_then(|c| c.alt())
            .map(str::to_string);
        return Some(SocialImage {
            url: site.absolute_url(cover),
            alt,
        });
    }
    site.default_image.as_deref().map(|image| SocialImage {
        url: site.absolute_url(image),
        alt: Some(site.name.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{ContentStatus, CoverImage};
    use chrono::TimeZone;

    fn site() -> SiteSettings {
        let mut site = SiteSettings::new("https://example.com", "Example Academy");
        site.description = "Learn things".into();
        site.default_image = Some("/og-default.png".into());
        site.twitter_handle = Some("@example".into());
        site
    }

    fn record() -> ContentRecord {
        ContentRecord {
            title: "Hello World".into(),
            slug: "hello-world".into(),
            excerpt: "An excerpt".into(),
            author: "Jane Doe".into(),
            tags: vec!["rust".into(), "web".into()],
            status: Some(ContentStatus::Published),
            published_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()),
            ..ContentRecord::default()
        }
    }

    #[test]
    fn falls_back_to_record_fields() {
        let meta = page_metadata(&record(), &site());
        assert_eq!(meta.title, "Hello World");
        assert_eq!(meta.description, "An excerpt");
        assert_eq!(meta.keywords, vec!["rust", "web"]);
        assert_eq!(meta.canonical_url, "https://example.com/blog/hello-world");
        assert!(!meta.noindex);
        assert_eq!(meta.open_graph.og_type, "article");
        assert_eq!(meta.open_graph.authors, vec!["Jane Doe"]);
        assert_eq!(meta.open_graph.modified_time, meta.open_graph.published_time);
        assert_eq!(meta.open_graph.images[0].url, "https://example.com/og-default.png");
        assert_eq!(meta.twitter.card, "summary_large_image");
        assert_eq!(meta.twitter.creator.as_deref(), Some("@example"));
    }

    #[test]
    fn seo_overrides_win() {
        let mut record = record();
        record.meta_title = Some("Custom title".into());
        record.meta_description = Some("Custom description".into());
        record.meta_keywords = vec!["seo".into()];
        record.canonical_url = Some("https://other.example/post".into());
        record.cover_image = Some(CoverImage {
            url: Some("/covers/hello.png".into()),
            alt: Some("A cover".into()),
        });

        let meta = page_metadata(&record, &site());
        assert_eq!(meta.title, "Custom title");
        assert_eq!(meta.description, "Custom description");
        assert_eq!(meta.keywords, vec!["seo"]);
        assert_eq!(meta.canonical_url, "https://other.example/post");
        assert_eq!(meta.open_graph.url, "https://example.com/blog/hello-world");
        assert_eq!(
            meta.open_graph.images,
            vec![SocialImage {
                url: "https://example.com/covers/hello.png".into(),
                alt: Some("A cover".into()),
            }]
        );
        assert_eq!(meta.twitter.images, vec!["https://example.com/covers/hello.png"]);
    }

    #[test]
    fn drafts_are_noindex_and_pages_are_websites() {
        let mut record = record();
        record.status = Some(ContentStatus::Draft);
        record.kind = ContentKind::Page;
        let meta = page_metadata(&record, &site());
        assert!(meta.noindex);
        assert_eq!(meta.open_graph.og_type, "website");
        assert_eq!(meta.open_graph.url, "https://example.com/hello-world");
    }

    #[test]
    fn empty_record_uses_site_defaults() {
        let meta = page_metadata(&ContentRecord::default(), &site());
        assert_eq!(meta.title, "Example Academy");
        assert_eq!(meta.description, "Learn things");
        assert!(meta.open_graph.authors.is_empty());
    }
}
