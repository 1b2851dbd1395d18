// src/domain/seo/score.rs
use crate::domain::content::ContentRecord;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const MAX_SCORE: u8 = 100;

const META_TITLE_MIN: usize = 30;
const META_TITLE_MAX: usize = 70;
const META_DESCRIPTION_MIN: usize = 120;
const META_DESCRIPTION_MAX: usize = 170;

// Looser than the validator's slug rule: hyphen placement is not checked.
static SEO_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid seo slug regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoReport {
    pub score: u8,
    pub warnings: Vec<String>,
}

#[derive(Default)]
struct Scorecard {
    penalty: u32,
    warnings: Vec<String>,
}

impl Scorecard {
    fn penalize(&mut self, points: u32, warning: impl Into<String>) {
        self.penalty += points;
        self.warnings.push(warning.into());
    }

    fn finish(self) -> SeoReport {
        let score = u32::from(MAX_SCORE).saturating_sub(self.penalty);
        SeoReport {
            score: u8::try_from(score).unwrap_or(0),
            warnings: self.warnings,
        }
    }
}

/// Rate a record against the SEO checklist.
///
/// Starts from 100; each failed rule subtracts its penalty and adds one
/// warning. Rules are independent except the length checks, which only run
/// when the field is present.
pub fn score_seo(record: &ContentRecord) -> SeoReport {
    let mut card = Scorecard::default();

    match record.meta_title() {
        None => card.penalize(10, "Meta title is missing"),
        Some(title) => {
            let len = title.chars().count();
            if len < META_TITLE_MIN {
                card.penalize(
                    5,
                    format!("Meta title is too short (under {META_TITLE_MIN} characters)"),
                );
            } else if len > META_TITLE_MAX {
                card.penalize(
                    5,
                    format!("Meta title is too long (over {META_TITLE_MAX} characters)"),
                );
            }
        }
    }

    match record.meta_description() {
        None => card.penalize(10, "Meta description is missing"),
        Some(description) => {
            let len = description.chars().count();
            if len < META_DESCRIPTION_MIN {
                card.penalize(
                    5,
                    format!(
                        "Meta description is too short (under {META_DESCRIPTION_MIN} characters)"
                    ),
                );
            } else if len > META_DESCRIPTION_MAX {
                card.penalize(
                    5,
                    format!(
                        "Meta description is too long (over {META_DESCRIPTION_MAX} characters)"
                    ),
                );
            }
        }
    }

    if record.meta_keywords.iter().all(|k| k.trim().is_empty()) {
        card.penalize(5, "Meta keywords are missing");
    }

    if !SEO_SLUG_RE.is_match(&record.slug) {
        card.penalize(10, "Slug should contain only lowercase letters, numbers, and hyphens");
    }

    match &record.cover_image {
        Some(cover) if cover.url().is_some() => {
            if cover.alt().is_none() {
                card.penalize(5, "Cover image is missing alt text");
            }
        }
        _ => card.penalize(5, "Cover image is missing"),
    }

    if record.is_published() && record.published_at.is_none() {
        card.penalize(10, "Published content is missing a publish date");
    }

    if record.tags.is_empty() {
        card.penalize(5, "No tags assigned");
    }

    if let Some(canonical) = record.canonical_url()
        && Url::parse(canonical).is_err()
    {
        tracing::debug!(canonical, "canonical url failed to parse");
        card.penalize(10, "Canonical URL is not a valid URL");
    }

    card.finish()
}
