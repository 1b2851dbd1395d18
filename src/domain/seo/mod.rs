// src/domain/seo/mod.rs
//! Search and social metadata derived from content records.
pub mod metadata;
pub mod schema;
pub mod score;
pub mod share;
pub mod site;

pub use metadata::{OpenGraph, PageMetadata, SocialImage, TwitterCard, page_metadata};
pub use schema::{
    Breadcrumb, article_schema, breadcrumb_schema, breadcrumbs_for, organization_schema,
    website_schema,
};
pub use score::{SeoReport, score_seo};
pub use share::{ShareLinks, encode_component, share_links};
pub use site::SiteSettings;
