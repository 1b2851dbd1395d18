// src/application/dto/analysis.rs
use crate::domain::content::TocEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TocEntryDto {
    pub id: String,
    pub level: u8,
    pub text: String,
}

impl From<TocEntry> for TocEntryDto {
    fn from(entry: TocEntry) -> Self {
        Self {
            id: entry.id,
            level: entry.level,
            text: entry.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugDto {
    pub slug: String,
    pub valid: bool,
}

/// Live editor feedback for a title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDto {
    pub slug: String,
    pub plain_text: String,
    pub word_count: usize,
    pub read_time_minutes: usize,
    pub read_time: String,
    pub excerpt: String,
    pub table_of_contents: Vec<TocEntryDto>,
}
