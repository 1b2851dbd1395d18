// src/application/queries/content/mod.rs
mod analyze;
mod metadata;
mod review;
mod service;

pub use analyze::{AnalyzeContentQuery, SlugifyQuery};
pub use metadata::ContentMetadataQuery;
pub use review::ReviewContentQuery;
pub use service::ContentQueryService;
