// src/domain/seo/schema.rs
//! JSON-LD structured data blocks.
use crate::domain::content::services::count_words;
use crate::domain::content::{ContentKind, ContentRecord};
use crate::domain::seo::metadata::{display_description, display_title, share_image};
use crate::domain::seo::site::SiteSettings;
use serde_json::{Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The main schema block for a record: `BlogPosting`, `Course` or `WebPage`.
pub fn article_schema(record: &ContentRecord, site: &SiteSettings) -> Value {
    match record.kind {
        ContentKind::Post => blog_posting_schema(record, site),
        ContentKind::Course => course_schema(record, site),
        ContentKind::Page => web_page_schema(record, site),
    }
}

pub fn blog_posting_schema(record: &ContentRecord, site: &SiteSettings) -> Value {
    let url = site.content_url(record.kind, &record.slug);
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BlogPosting",
        "headline": display_title(record, site),
        "description": display_description(record, site),
        "url": url,
        "mainEntityOfPage": { "@type": "WebPage", "@id": url },
        "publisher": publisher(site),
    });

    if !record.author.trim().is_empty() {
        set(&mut schema, "author", json!({ "@type": "Person", "name": record.author }));
    }
    if let Some(image) = share_image(record, site) {
        set(&mut schema, "image", Value::from(image.url));
    }
    if let Some(published) = record.published_at {
        set(&mut schema, "datePublished", Value::from(published.to_rfc3339()));
    }
    if let Some(modified) = record.updated_at.or(record.published_at) {
        set(&mut schema, "dateModified", Value::from(modified.to_rfc3339()));
    }
    if !record.tags.is_empty() {
        set(&mut schema, "keywords", Value::from(record.tags.join(", ")));
    }
    let words = count_words(&record.plain_text());
    if words > 0 {
        set(&mut schema, "wordCount", Value::from(words));
    }
    schema
}

pub fn course_schema(record: &ContentRecord, site: &SiteSettings) -> Value {
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Course",
        "name": display_title(record, site),
        "description": display_description(record, site),
        "url": site.content_url(record.kind, &record.slug),
        "provider": {
            "@type": "Organization",
            "name": site.name,
            "sameAs": site.base_url(),
        },
    });
    if let Some(image) = share_image(record, site) {
        set(&mut schema, "image", Value::from(image.url));
    }
    schema
}

fn web_page_schema(record: &ContentRecord, site: &SiteSettings) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebPage",
        "name": display_title(record, site),
        "description": display_description(record, site),
        "url": site.content_url(record.kind, &record.slug),
        "isPartOf": { "@type": "WebSite", "name": site.name, "url": site.base_url() },
    })
}

/// Home, then the section index for posts and courses, then the record.
pub fn breadcrumbs_for(record: &ContentRecord, site: &SiteSettings) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb::new("Home", site.base_url())];
    match record.kind {
        ContentKind::Post => trail.push(Breadcrumb::new("Blog", site.absolute_url("/blog"))),
        ContentKind::Course => {
            trail.push(Breadcrumb::new("Courses", site.absolute_url("/courses")));
        }
        ContentKind::Page => {}
    }
    trail.push(Breadcrumb::new(
        display_title(record, site),
        site.content_url(record.kind, &record.slug),
    ));
    trail
}

pub fn breadcrumb_schema(items: &[Breadcrumb]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

pub fn organization_schema(site: &SiteSettings) -> Value {
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": site.name,
        "url": site.base_url(),
    });
    if let Some(logo) = &site.logo_url {
        set(&mut schema, "logo", Value::from(site.absolute_url(logo)));
    }
    if let Some(handle) = &site.twitter_handle {
        let handle = handle.trim_start_matches('@');
        set(&mut schema, "sameAs", json!([format!("https://twitter.com/{handle}")]));
    }
    schema
}

pub fn website_schema(site: &SiteSettings) -> Value {
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": site.name,
        "url": site.base_url(),
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/search?q={{search_term_string}}", site.base_url()),
            "query-input": "required name=search_term_string",
        },
    });
    if !site.description.is_empty() {
        set(&mut schema, "description", Value::from(site.description.as_str()));
    }
    schema
}

fn publisher(site: &SiteSettings) -> Value {
    let mut publisher = json!({ "@type": "Organization", "name": site.name });
    if let Some(logo) = &site.logo_url {
        set(
            &mut publisher,
            "logo",
            json!({ "@type": "ImageObject", "url": site.absolute_url(logo) }),
        );
    }
    publisher
}

fn set(schema: &mut Value, key: &str, value: Value) {
    if let Some(map) = schema.as_object_mut() {
        map.insert(key.to_string(), value);
    }
}
