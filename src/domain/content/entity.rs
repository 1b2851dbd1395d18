// src/domain/content/entity.rs
use crate::domain::content::rich_text::RichTextNode;
use crate::domain::content::services::{
    TocEntry, extract_plain_text, generate_excerpt, generate_table_of_contents, strip_html,
};
use crate::domain::content::value_objects::{ContentKind, ContentStatus};
use chrono::{DateTime, Utc};

/// Body of a record: legacy HTML or an editor document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBody {
    Html(String),
    RichText(RichTextNode),
}

impl ContentBody {
    /// An empty HTML string counts as no body; any document tree counts as one.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Html(html) => !html.is_empty(),
            Self::RichText(_) => true,
        }
    }

    pub fn plain_text(&self) -> String {
        match self {
            Self::Html(html) => strip_html(html),
            Self::RichText(tree) => extract_plain_text(tree),
        }
    }

    pub fn excerpt(&self, max_length: usize) -> String {
        match self {
            Self::Html(html) => generate_excerpt(html, max_length),
            Self::RichText(tree) => generate_excerpt(&extract_plain_text(tree), max_length),
        }
    }

    /// HTML bodies carry no heading structure the outline builder can read.
    pub fn table_of_contents(&self) -> Vec<TocEntry> {
        match self {
            Self::Html(_) => Vec::new(),
            Self::RichText(tree) => generate_table_of_contents(tree),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverImage {
    pub url: Option<String>,
    pub alt: Option<String>,
}

impl CoverImage {
    pub fn url(&self) -> Option<&str> {
        non_empty(self.url.as_deref())
    }

    pub fn alt(&self) -> Option<&str> {
        non_empty(self.alt.as_deref())
    }
}

/// A blog post, course or page section as the editor submits it.
///
/// Fields stay loose while a record is mid-edit; the validator and the SEO
/// scorer decide what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRecord {
    pub kind: ContentKind,
    pub title: String,
    pub slug: String,
    pub body: Option<ContentBody>,
    pub excerpt: String,
    pub read_time: Option<String>,
    pub author: String,
    pub tags: Vec<String>,
    pub status: Option<ContentStatus>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Vec<String>,
    pub canonical_url: Option<String>,
    pub cover_image: Option<CoverImage>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ContentRecord {
    /// Replace the tag set, dropping blanks and repeats while keeping the
    /// first occurrence order.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into().trim().to_string();
            if !tag.is_empty() && !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        self.tags = unique;
    }

    pub fn has_body(&self) -> bool {
        self.body.as_ref().is_some_and(ContentBody::is_present)
    }

    pub fn plain_text(&self) -> String {
        self.body
            .as_ref()
            .map(ContentBody::plain_text)
            .unwrap_or_default()
    }

    pub fn is_published(&self) -> bool {
        self.status.as_ref().is_some_and(ContentStatus::is_published)
    }

    pub fn meta_title(&self) -> Option<&str> {
        non_empty(self.meta_title.as_deref())
    }

    pub fn meta_description(&self) -> Option<&str> {
        non_empty(self.meta_description.as_deref())
    }

    pub fn canonical_url(&self) -> Option<&str> {
        non_empty(self.canonical_url.as_deref())
    }

    pub fn cover_url(&self) -> Option<&str> {
        self.cover_image.as_ref().and_then(CoverImage::url)
    }

    /// Stamp timestamps the way a save does: creation once, update always,
    /// publication the first time the record is saved as published.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self.updated_at = Some(now);
        if self.is_published() && self.published_at.is_none() {
            self.published_at = Some(now);
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
