// src/application/queries/content/service.rs
use std::sync::Arc;

use crate::{application::ports::util::SlugGenerator, domain::seo::SiteSettings};

pub struct ContentQueryService {
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) site: Arc<SiteSettings>,
}

impl ContentQueryService {
    pub fn new(slugger: Arc<dyn SlugGenerator>, site: Arc<SiteSettings>) -> Self {
        Self { slugger, site }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        dto::ContentRecordDto,
        error::ApplicationError,
        queries::content::{
            AnalyzeContentQuery, ContentMetadataQuery, ReviewContentQuery, SlugifyQuery,
        },
    };
    use crate::domain::content::services::slugify;
    use serde_json::json;

    struct Slugger;

    impl SlugGenerator for Slugger {
        fn slugify(&self, input: &str) -> String {
            slugify(input)
        }
    }

    fn service() -> ContentQueryService {
        ContentQueryService::new(
            Arc::new(Slugger),
            Arc::new(SiteSettings::new("https://example.com", "Example")),
        )
    }

    #[test]
    fn slugify_reports_validity() {
        let dto = service().slugify(SlugifyQuery { title: "Hello World".into() });
        assert_eq!(dto.slug, "hello-world");
        assert!(dto.valid);

        let empty = service().slugify(SlugifyQuery { title: "???".into() });
        assert_eq!(empty.slug, "");
        assert!(!empty.valid);
    }

    #[test]
    fn analyze_rich_text() {
        let analysis = service().analyze(AnalyzeContentQuery {
            title: Some("Getting Started".into()),
            body: Some(json!({
                "type": "doc",
                "content": [
                    { "type": "heading", "attrs": { "level": 1 }, "content": [{ "type": "text", "text": "Intro" }] },
                    { "type": "paragraph", "content": [{ "type": "text", "text": "Hello there reader" }] }
                ]
            })),
            excerpt_length: Some(10),
        });

        assert_eq!(analysis.slug, "getting-started");
        assert_eq!(analysis.plain_text, "Intro Hello there reader");
        assert_eq!(analysis.word_count, 4);
        assert_eq!(analysis.read_time, "1 min read");
        assert_eq!(analysis.read_time_minutes, 1);
        assert_eq!(analysis.excerpt, "Intro H...");
        assert_eq!(analysis.table_of_contents.len(), 1);
        assert_eq!(analysis.table_of_contents[0].id, "heading-0");
    }

    #[test]
    fn analyze_without_body() {
        let analysis = service().analyze(AnalyzeContentQuery {
            title: None,
            body: None,
            excerpt_length: None,
        });
        assert_eq!(analysis.read_time, "Less than 1 min");
        assert!(analysis.excerpt.is_empty());
        assert!(analysis.table_of_contents.is_empty());
    }

    #[test]
    fn review_validates_and_scores() {
        let record: ContentRecordDto = serde_json::from_value(json!({ "slug": "ok" })).unwrap();
        let report = service().validate(ReviewContentQuery { record: record.clone() });
        assert!(!report.valid);
        let seo = service().score_seo(ReviewContentQuery { record });
        assert!(seo.score < 100);
    }

    #[test]
    fn metadata_requires_valid_slug() {
        let record: ContentRecordDto =
            serde_json::from_value(json!({ "title": "Hi", "slug": "Not Valid" })).unwrap();
        let err = service()
            .metadata(ContentMetadataQuery { record })
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[test]
    fn metadata_bundle_has_four_schemas() {
        let record: ContentRecordDto = serde_json::from_value(json!({
            "title": "Hi",
            "slug": "hi",
            "status": "published"
        }))
        .unwrap();
        let bundle = service().metadata(ContentMetadataQuery { record }).unwrap();
        assert_eq!(bundle.schemas.len(), 4);
        assert_eq!(bundle.schemas[0]["@type"], "BlogPosting");
        assert_eq!(bundle.metadata.canonical_url, "https://example.com/blog/hi");
        assert!(bundle.share_links.facebook.contains("example.com%2Fblog%2Fhi"));
    }
}
