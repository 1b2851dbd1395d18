// src/application/dto/seo.rs
use crate::domain::content::ValidationReport;
use crate::domain::seo::{OpenGraph, PageMetadata, SeoReport, ShareLinks, SocialImage, TwitterCard};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationReportDto {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl From<ValidationReport> for ValidationReportDto {
    fn from(report: ValidationReport) -> Self {
        Self {
            valid: report.valid,
            errors: report.errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeoReportDto {
    pub score: u8,
    pub warnings: Vec<String>,
}

impl From<SeoReport> for SeoReportDto {
    fn from(report: SeoReport) -> Self {
        Self {
            score: report.score,
            warnings: report.warnings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialImageDto {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl From<SocialImage> for SocialImageDto {
    fn from(image: SocialImage) -> Self {
        Self {
            url: image.url,
            alt: image.alt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphDto {
    #[serde(rename = "type")]
    pub og_type: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    pub images: Vec<SocialImageDto>,
    #[serde(default, with = "serde_time", skip_serializing_if = "Option::is_none")]
    pub published_time: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time", skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<DateTime<Utc>>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

impl From<OpenGraph> for OpenGraphDto {
    fn from(og: OpenGraph) -> Self {
        Self {
            og_type: og.og_type.to_string(),
            title: og.title,
            description: og.description,
            url: og.url,
            site_name: og.site_name,
            locale: og.locale,
            images: og.images.into_iter().map(Into::into).collect(),
            published_time: og.published_time,
            modified_time: og.modified_time,
            authors: og.authors,
            tags: og.tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TwitterCardDto {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

impl From<TwitterCard> for TwitterCardDto {
    fn from(card: TwitterCard) -> Self {
        Self {
            card: card.card.to_string(),
            title: card.title,
            description: card.description,
            images: card.images,
            creator: card.creator,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadataDto {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub noindex: bool,
    pub open_graph: OpenGraphDto,
    pub twitter: TwitterCardDto,
}

impl From<PageMetadata> for PageMetadataDto {
    fn from(meta: PageMetadata) -> Self {
        Self {
            title: meta.title,
            description: meta.description,
            keywords: meta.keywords,
            canonical_url: meta.canonical_url,
            noindex: meta.noindex,
            open_graph: meta.open_graph.into(),
            twitter: meta.twitter.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShareLinksDto {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub whatsapp: String,
    pub reddit: String,
    pub pinterest: String,
}

impl From<ShareLinks> for ShareLinksDto {
    fn from(links: ShareLinks) -> Self {
        Self {
            twitter: links.twitter,
            facebook: links.facebook,
            linkedin: links.linkedin,
            whatsapp: links.whatsapp,
            reddit: links.reddit,
            pinterest: links.pinterest,
        }
    }
}

/// Head tags, JSON-LD blocks and share links for one rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBundleDto {
    pub metadata: PageMetadataDto,
    #[schema(value_type = Vec<Object>)]
    pub schemas: Vec<Value>,
    pub share_links: ShareLinksDto,
}
