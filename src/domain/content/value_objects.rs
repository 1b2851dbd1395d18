// src/domain/content/value_objects.rs
use crate::domain::content::services::slug::is_valid_slug;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// A slug that satisfies `^[a-z0-9]+(-[a-z0-9]+)*$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentSlug(String);

impl ContentSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!(
                "slug '{value}' must be lowercase words separated by single hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ContentSlug> for String {
    fn from(value: ContentSlug) -> Self {
        value.0
    }
}

/// Publication state of a record.
///
/// Values outside `draft`/`published` are kept as [`ContentStatus::Unknown`] so
/// that the validator can report them rather than rejecting the whole payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentStatus {
    Draft,
    Published,
    Unknown(String),
}

impl ContentStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "draft" => Self::Draft,
            "published" => Self::Published,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Unknown(raw) => raw,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    pub const fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of page a record renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentKind {
    #[default]
    Post,
    Course,
    Page,
}

impl ContentKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "post" => Some(Self::Post),
            "course" => Some(Self::Course),
            "page" => Some(Self::Page),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Course => "course",
            Self::Page => "page",
        }
    }

    /// Path segment the public site serves this kind under.
    pub const fn path_prefix(self) -> &'static str {
        match self {
            Self::Post => "/blog",
            Self::Course => "/courses",
            Self::Page => "",
        }
    }
}
