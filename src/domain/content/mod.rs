// src/domain/content/mod.rs
pub mod entity;
pub mod rich_text;
pub mod services;
pub mod validation;
pub mod value_objects;

pub use entity::{ContentBody, ContentRecord, CoverImage};
pub use rich_text::{NodeKind, RichTextNode};
pub use services::TocEntry;
pub use validation::{ValidationReport, validate_content};
pub use value_objects::{ContentKind, ContentSlug, ContentStatus};
