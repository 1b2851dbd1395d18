// src/application/dto/content.rs
use crate::domain::content::{
    ContentBody, ContentKind, ContentRecord, ContentStatus, CoverImage, RichTextNode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use super::{SeoReportDto, serde_time};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CoverImageDto {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Wire shape of a content record as the editor submits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecordDto {
    /// `post`, `course` or `page`; defaults to `post`.
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    /// HTML string or rich-text document. `content` is accepted as an alias.
    #[serde(default, alias = "content", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub body: Option<Value>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    /// List of keywords or a single comma separated string.
    #[serde(default, deserialize_with = "string_list")]
    pub meta_keywords: Vec<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub cover_image: Option<CoverImageDto>,
    #[serde(default, with = "serde_time")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreparedContentDto {
    pub record: ContentRecordDto,
    pub seo: SeoReportDto,
}

/// Accepts `["a", "b"]`, `"a, b"` or `null`.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

fn body_from_value(value: Value) -> Option<ContentBody> {
    match value {
        Value::Null => None,
        Value::String(html) => Some(ContentBody::Html(html)),
        Value::Object(_) => Some(ContentBody::RichText(RichTextNode::from_value(&value))),
        Value::Array(children) => Some(ContentBody::RichText(RichTextNode::from_value(
            &json!({ "type": "doc", "content": children }),
        ))),
        other => {
            tracing::warn!(
                kind = %other,
                "ignoring content body that is neither html nor a document"
            );
            None
        }
    }
}

fn body_to_value(body: ContentBody) -> Value {
    match body {
        ContentBody::Html(html) => Value::String(html),
        ContentBody::RichText(tree) => tree.to_value(),
    }
}

impl From<ContentRecordDto> for ContentRecord {
    fn from(dto: ContentRecordDto) -> Self {
        let kind = dto.kind.as_deref().and_then(ContentKind::parse).unwrap_or_default();
        let mut record = Self {
            kind,
            title: dto.title.unwrap_or_default(),
            slug: dto.slug.unwrap_or_default(),
            body: dto.body.and_then(body_from_value),
            excerpt: dto.excerpt.unwrap_or_default(),
            read_time: dto.read_time,
            author: dto.author.unwrap_or_default(),
            tags: Vec::new(),
            status: dto.status.as_deref().map(ContentStatus::parse),
            meta_title: dto.meta_title,
            meta_description: dto.meta_description,
            meta_keywords: dto.meta_keywords,
            canonical_url: dto.canonical_url,
            cover_image: dto.cover_image.map(|cover| CoverImage {
                url: cover.url,
                alt: cover.alt,
            }),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            published_at: dto.published_at,
        };
        record.set_tags(dto.tags);
        record
    }
}

impl From<ContentRecord> for ContentRecordDto {
    fn from(record: ContentRecord) -> Self {
        Self {
            kind: Some(record.kind.as_str().to_string()),
            title: Some(record.title),
            slug: Some(record.slug),
            body: record.body.map(body_to_value),
            excerpt: Some(record.excerpt),
            read_time: record.read_time,
            author: Some(record.author),
            tags: record.tags,
            status: record.status.map(|status| status.as_str().to_string()),
            meta_title: record.meta_title,
            meta_description: record.meta_description,
            meta_keywords: record.meta_keywords,
            canonical_url: record.canonical_url,
            cover_image: record.cover_image.map(|cover| CoverImageDto {
                url: cover.url,
                alt: cover.alt,
            }),
            created_at: record.created_at,
            updated_at: record.updated_at,
            published_at: record.published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_payload() {
        let dto: ContentRecordDto = serde_json::from_value(json!({
            "title": "Hello",
            "slug": "hello",
            "content": "<p>Hi</p>",
            "metaTitle": "Meta",
            "metaKeywords": "rust, web ,",
            "tags": ["a", "a", "b"],
            "status": "archived",
            "coverImage": { "url": "/c.png" },
            "publishedAt": "2024-03-01T10:00:00Z",
            "createdAt": ""
        }))
        .unwrap();

        let record: ContentRecord = dto.into();
        assert_eq!(record.body, Some(ContentBody::Html("<p>Hi</p>".into())));
        assert_eq!(record.meta_keywords, vec!["rust", "web"]);
        assert_eq!(record.tags, vec!["a", "b"]);
        assert_eq!(record.status, Some(ContentStatus::Unknown("archived".into())));
        assert_eq!(record.cover_url(), Some("/c.png"));
        assert!(record.published_at.is_some());
        assert!(record.created_at.is_none());
        assert_eq!(record.kind, ContentKind::Post);
    }

    #[test]
    fn nulls_read_as_empty() {
        let dto: ContentRecordDto = serde_json::from_value(json!({
            "title": null,
            "slug": null,
            "content": null,
            "tags": null,
            "metaKeywords": null
        }))
        .unwrap();
        let record: ContentRecord = dto.into();
        assert_eq!(record.title, "");
        assert!(record.body.is_none());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn rich_text_body_round_trips() {
        let doc = json!({
            "type": "doc",
            "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "x" }] }]
        });
        let dto = ContentRecordDto {
            body: Some(doc.clone()),
            kind: Some("course".into()),
            ..ContentRecordDto::default()
        };
        let record: ContentRecord = dto.into();
        assert_eq!(record.kind, ContentKind::Course);
        let back: ContentRecordDto = record.into();
        assert_eq!(back.body, Some(doc));
        assert_eq!(back.kind.as_deref(), Some("course"));
    }

    #[test]
    fn serializes_timestamps_as_rfc3339() {
        let dto = ContentRecordDto {
            published_at: Some(
                DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
            ..ContentRecordDto::default()
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["publishedAt"], "2024-03-01T10:00:00+00:00");
        assert!(value["createdAt"].is_null());
        assert!(value.get("body").is_none());
    }
}
