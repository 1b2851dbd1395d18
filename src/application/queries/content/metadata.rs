// src/application/queries/content/metadata.rs
use super::ContentQueryService;
use crate::{
    application::{
        dto::{ContentRecordDto, MetadataBundleDto},
        error::ApplicationResult,
    },
    domain::{
        content::{ContentRecord, ContentSlug},
        seo::{
            article_schema, breadcrumb_schema, breadcrumbs_for, organization_schema,
            page_metadata, share_links, website_schema,
        },
    },
};

pub struct ContentMetadataQuery {
    pub record: ContentRecordDto,
}

impl ContentQueryService {
    /// Head metadata, JSON-LD blocks and share links for a rendered page.
    ///
    /// The record must already carry a valid slug since every URL is built
    /// from it.
    pub fn metadata(&self, query: ContentMetadataQuery) -> ApplicationResult<MetadataBundleDto> {
        let record: ContentRecord = query.record.into();
        ContentSlug::new(record.slug.clone())?;

        let site = self.site.as_ref();
        let schemas = vec![
            article_schema(&record, site),
            breadcrumb_schema(&breadcrumbs_for(&record, site)),
            organization_schema(site),
            website_schema(site),
        ];

        Ok(MetadataBundleDto {
            metadata: page_metadata(&record, site).into(),
            schemas,
            share_links: share_links(&record, site).into(),
        })
    }
}
