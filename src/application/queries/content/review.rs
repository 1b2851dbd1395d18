// src/application/queries/content/review.rs
use super::ContentQueryService;
use crate::{
    application::dto::{ContentRecordDto, SeoReportDto, ValidationReportDto},
    domain::{
        content::{ContentRecord, validate_content},
        seo::score_seo,
    },
};

pub struct ReviewContentQuery {
    pub record: ContentRecordDto,
}

impl ContentQueryService {
    pub fn validate(&self, query: ReviewContentQuery) -> ValidationReportDto {
        let record: ContentRecord = query.record.into();
        validate_content(&record).into()
    }

    pub fn score_seo(&self, query: ReviewContentQuery) -> SeoReportDto {
        let record: ContentRecord = query.record.into();
        let report = score_seo(&record);
        if !report.warnings.is_empty() {
            tracing::debug!(score = report.score, warnings = report.warnings.len(), "seo review");
        }
        report.into()
    }
}
