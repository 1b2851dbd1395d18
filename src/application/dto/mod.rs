// src/application/dto/mod.rs
pub mod analysis;
pub mod content;
pub mod seo;
pub mod serde_time;

pub use analysis::{AnalysisDto, SlugDto, TocEntryDto};
pub use content::{ContentRecordDto, CoverImageDto, PreparedContentDto};
pub use seo::{
    MetadataBundleDto, OpenGraphDto, PageMetadataDto, SeoReportDto, ShareLinksDto, SocialImageDto,
    TwitterCardDto, ValidationReportDto,
};
