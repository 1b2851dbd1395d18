// tests/content_command_service_unit.rs
use std::sync::Arc;

use serde_json::json;

mod support;

use content_core::application::commands::content::{
    ContentCommandService, PrepareContentCommand,
};
use content_core::application::dto::ContentRecordDto;
use content_core::application::error::ApplicationError;
use content_core::application::ports::util::SlugGenerator;

/// Records every title it is asked to slugify.
struct RecordingSlugger {
    seen: std::sync::Mutex<Vec<String>>,
}

impl SlugGenerator for RecordingSlugger {
    fn slugify(&self, input: &str) -> String {
        self.seen.lock().unwrap().push(input.to_string());
        content_core::domain::content::services::slugify(input)
    }
}

fn record(value: serde_json::Value) -> ContentRecordDto {
    serde_json::from_value(value).unwrap()
}

fn service(slugger: Arc<RecordingSlugger>) -> ContentCommandService {
    ContentCommandService::new(slugger, Arc::new(support::DummyClock))
}

#[test]
fn existing_slug_is_kept_without_slugifying() {
    let slugger = Arc::new(RecordingSlugger {
        seen: std::sync::Mutex::new(Vec::new()),
    });
    let svc = service(Arc::clone(&slugger));

    let command = PrepareContentCommand::builder()
        .record(record(support::RecordBuilder::new().build()))
        .build()
        .unwrap();
    let prepared = svc.prepare_content(command).unwrap();

    assert_eq!(prepared.record.slug.as_deref(), Some("getting-started-with-rust"));
    assert!(slugger.seen.lock().unwrap().is_empty());
}

#[test]
fn unusable_title_falls_back_to_kind_and_timestamp() {
    let slugger = Arc::new(RecordingSlugger {
        seen: std::sync::Mutex::new(Vec::new()),
    });
    let svc = service(Arc::clone(&slugger));

    let dto = record(
        support::RecordBuilder::new()
            .set("kind", json!("course"))
            .set("title", json!("???"))
            .without("slug")
            .build(),
    );
    let command = PrepareContentCommand::builder().record(dto).build().unwrap();
    let prepared = svc.prepare_content(command).unwrap();

    let expected = format!("course-{}", support::fixed_now().timestamp());
    assert_eq!(prepared.record.slug.as_deref(), Some(expected.as_str()));
    assert_eq!(*slugger.seen.lock().unwrap(), vec!["???".to_string()]);
}

#[test]
fn too_many_tags_is_rejected() {
    let slugger = Arc::new(RecordingSlugger {
        seen: std::sync::Mutex::new(Vec::new()),
    });
    let svc = service(slugger);

    let tags: Vec<String> = (0..11).map(|i| format!("tag-{i}")).collect();
    let dto = record(support::RecordBuilder::new().set("tags", json!(tags)).build());
    let command = PrepareContentCommand::builder().record(dto).build().unwrap();

    match svc.prepare_content(command) {
        Err(ApplicationError::InvalidContent(errors)) => {
            assert_eq!(errors, vec!["A maximum of 10 tags is allowed".to_string()]);
        }
        other => panic!("expected InvalidContent, got {other:?}"),
    }
}

#[test]
fn builder_requires_a_record() {
    assert!(PrepareContentCommand::builder().build().is_err());
}
