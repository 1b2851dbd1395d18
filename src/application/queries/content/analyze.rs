// src/application/queries/content/analyze.rs
use super::ContentQueryService;
use crate::{
    application::dto::{AnalysisDto, ContentRecordDto, SlugDto},
    domain::content::{
        ContentBody, ContentRecord,
        services::{
            DEFAULT_EXCERPT_LENGTH, calculate_read_time, count_words, is_valid_slug,
            read_time_minutes,
        },
    },
};
use serde_json::Value;

pub struct SlugifyQuery {
    pub title: String,
}

pub struct AnalyzeContentQuery {
    pub title: Option<String>,
    pub body: Option<Value>,
    pub excerpt_length: Option<usize>,
}

impl ContentQueryService {
    pub fn slugify(&self, query: SlugifyQuery) -> SlugDto {
        let slug = self.slugger.slugify(&query.title);
        let valid = is_valid_slug(&slug);
        SlugDto { slug, valid }
    }

    /// Everything the editor recomputes on each change of title or body.
    pub fn analyze(&self, query: AnalyzeContentQuery) -> AnalysisDto {
        let record: ContentRecord = ContentRecordDto {
            title: query.title,
            body: query.body,
            ..ContentRecordDto::default()
        }
        .into();

        let plain_text = record.plain_text();
        let word_count = count_words(&plain_text);
        let excerpt_length = query.excerpt_length.unwrap_or(DEFAULT_EXCERPT_LENGTH);
        let excerpt = record
            .body
            .as_ref()
            .map(|body| body.excerpt(excerpt_length))
            .unwrap_or_default();
        let table_of_contents = record
            .body
            .as_ref()
            .map(ContentBody::table_of_contents)
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();

        tracing::debug!(word_count, "content analysed");

        AnalysisDto {
            slug: self.slugger.slugify(&record.title),
            read_time: calculate_read_time(&plain_text),
            read_time_minutes: read_time_minutes(word_count),
            plain_text,
            word_count,
            excerpt,
            table_of_contents,
        }
    }
}
