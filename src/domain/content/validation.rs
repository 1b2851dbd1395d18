// src/domain/content/validation.rs
use crate::domain::content::entity::ContentRecord;
use crate::domain::content::services::{DEFAULT_EXCERPT_LENGTH, is_valid_slug};

pub const MAX_EXCERPT_LENGTH: usize = DEFAULT_EXCERPT_LENGTH;
pub const MAX_TAGS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check a record before it is saved.
///
/// Every check runs; the report lists all failures in check order so the
/// editor can show them together.
pub fn validate_content(record: &ContentRecord) -> ValidationReport {
    let mut errors = Vec::new();

    if record.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    }

    if record.slug.trim().is_empty() {
        errors.push("Slug is required".to_string());
    } else if !is_valid_slug(&record.slug) {
        errors.push(
            "Slug must contain only lowercase letters, numbers, and single hyphens".to_string(),
        );
    }

    if record.excerpt.trim().is_empty() {
        errors.push("Excerpt is required".to_string());
    } else if record.excerpt.chars().count() > MAX_EXCERPT_LENGTH {
        errors.push(format!(
            "Excerpt must be {MAX_EXCERPT_LENGTH} characters or less"
        ));
    }

    if !record.has_body() {
        errors.push("Content is required".to_string());
    }

    if record.author.trim().is_empty() {
        errors.push("Author is required".to_string());
    }

    if !record.status.as_ref().is_some_and(|status| status.is_known()) {
        errors.push("Status must be either draft or published".to_string());
    }

    if record.tags.len() > MAX_TAGS {
        errors.push(format!("A maximum of {MAX_TAGS} tags is allowed"));
    }

    ValidationReport::from_errors(errors)
}
