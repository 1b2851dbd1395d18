// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("content failed validation: {}", .0.join("; "))]
    InvalidContent(Vec<String>),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Individual problems behind the error, if it carries more than a message.
    pub fn details(&self) -> &[String] {
        match self {
            Self::InvalidContent(errors) => errors,
            _ => &[],
        }
    }
}
