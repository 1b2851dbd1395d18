// src/application/commands/content/prepare.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::{ContentRecordDto, PreparedContentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{
            ContentRecord, validate_content,
            services::{DEFAULT_EXCERPT_LENGTH, calculate_read_time},
        },
        seo::score_seo,
    },
};

/// Fill the derived fields of a record and check it is ready to be saved.
pub struct PrepareContentCommand {
    pub record: ContentRecordDto,
    /// Re-derive the slug from the title even when one is already set.
    pub regenerate_slug: bool,
}

impl PrepareContentCommand {
    pub fn builder() -> PrepareContentCommandBuilder {
        PrepareContentCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct PrepareContentCommandBuilder {
    record: Option<ContentRecordDto>,
    regenerate_slug: bool,
}

impl PrepareContentCommandBuilder {
    #[must_use]
    pub fn record(mut self, record: ContentRecordDto) -> Self {
        self.record = Some(record);
        self
    }

    #[must_use]
    pub const fn regenerate_slug(mut self, regenerate: bool) -> Self {
        self.regenerate_slug = regenerate;
        self
    }

    pub fn build(self) -> Result<PrepareContentCommand, &'static str> {
        Ok(PrepareContentCommand {
            record: self.record.ok_or("record is required")?,
            regenerate_slug: self.regenerate_slug,
        })
    }
}

impl ContentCommandService {
    pub fn prepare_content(
        &self,
        command: PrepareContentCommand,
    ) -> ApplicationResult<PreparedContentDto> {
        let mut record: ContentRecord = command.record.into();
        let now = self.clock.now();

        if command.regenerate_slug || record.slug.trim().is_empty() {
            record.slug = self.derive_slug(&record, now.timestamp());
        }

        if record.excerpt.trim().is_empty()
            && let Some(body) = &record.body
        {
            record.excerpt = body.excerpt(DEFAULT_EXCERPT_LENGTH);
        }

        record.read_time = Some(calculate_read_time(&record.plain_text()));
        record.touch(now);

        let report = validate_content(&record);
        if !report.valid {
            tracing::debug!(errors = ?report.errors, slug = %record.slug, "content rejected");
            return Err(ApplicationError::InvalidContent(report.errors));
        }

        let seo = score_seo(&record);
        tracing::debug!(slug = %record.slug, score = seo.score, "content prepared");

        Ok(PreparedContentDto {
            record: record.into(),
            seo: seo.into(),
        })
    }

    /// Titles without usable characters fall back to `<kind>-<timestamp>`.
    fn derive_slug(&self, record: &ContentRecord, timestamp: i64) -> String {
        let slug = self.slugger.slugify(&record.title);
        if slug.is_empty() {
            format!("{}-{timestamp}", record.kind.as_str())
        } else {
            slug
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{time::Clock, util::SlugGenerator};
    use crate::domain::content::services::slugify;
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;
    use std::sync::Arc;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct Slugger;

    impl SlugGenerator for Slugger {
        fn slugify(&self, input: &str) -> String {
            slugify(input)
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn service() -> ContentCommandService {
        ContentCommandService::new(Arc::new(Slugger), Arc::new(FixedClock(now())))
    }

    fn draft(value: serde_json::Value) -> ContentRecordDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn derives_missing_fields() {
        let command = PrepareContentCommand::builder()
            .record(draft(json!({
                "title": "Hello, World!",
                "body": "<p>Some <b>words</b> here</p>",
                "author": "Jane",
                "status": "published"
            })))
            .build()
            .unwrap();

        let prepared = service().prepare_content(command).unwrap();
        let record = prepared.record;
        assert_eq!(record.slug.as_deref(), Some("hello-world"));
        assert_eq!(record.excerpt.as_deref(), Some("Some words here"));
        assert_eq!(record.read_time.as_deref(), Some("1 min read"));
        assert_eq!(record.created_at, Some(now()));
        assert_eq!(record.published_at, Some(now()));
        assert!(prepared.seo.score < 100);
    }

    #[test]
    fn keeps_manual_slug_override_unless_regenerating() {
        let record = draft(json!({
            "title": "New Title",
            "slug": "custom-slug",
            "excerpt": "Short",
            "body": "<p>x</p>",
            "author": "Jane",
            "status": "draft"
        }));

        let kept = service()
            .prepare_content(PrepareContentCommand {
                record: record.clone(),
                regenerate_slug: false,
            })
            .unwrap();
        assert_eq!(kept.record.slug.as_deref(), Some("custom-slug"));

        let regenerated = service()
            .prepare_content(PrepareContentCommand { record, regenerate_slug: true })
            .unwrap();
        assert_eq!(regenerated.record.slug.as_deref(), Some("new-title"));
    }

    #[test]
    fn unusable_title_falls_back_to_timestamp_slug() {
        let record = draft(json!({
            "title": "!!!",
            "kind": "course",
            "excerpt": "Short",
            "body": "<p>x</p>",
            "author": "Jane",
            "status": "draft"
        }));
        let prepared = service()
            .prepare_content(PrepareContentCommand { record, regenerate_slug: false })
            .unwrap();
        assert_eq!(
            prepared.record.slug,
            Some(format!("course-{}", now().timestamp()))
        );
    }

    #[test]
    fn rejects_invalid_records_with_every_error() {
        let record = draft(json!({ "title": "", "status": "archived" }));
        let err = service()
            .prepare_content(PrepareContentCommand { record, regenerate_slug: false })
            .unwrap_err();

        match err {
            ApplicationError::InvalidContent(errors) => {
                assert_eq!(
                    errors,
                    vec![
                        "Title is required",
                        "Excerpt is required",
                        "Content is required",
                        "Author is required",
                        "Status must be either draft or published",
                    ]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn builder_requires_record() {
        assert!(PrepareContentCommand::builder().build().is_err());
    }
}
