// src/application/error.rs
use std::fmt::Display;

use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Uniform message for lookups that came back empty, e.g. `article 42 not found`.
    pub fn missing(kind: &str, key: impl Display) -> Self {
        Self::NotFound(format!("{kind} {key} not found"))
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// The slug that lost a uniqueness race, if this error is one.
    pub const fn taken_slug(&self) -> Option<&String> {
        match self {
            Self::Domain(DomainError::DuplicateSlug(slug)) => Some(slug),
            _ => None,
        }
    }

    pub const fn is_slug_conflict(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::DuplicateSlug(_) | DomainError::SlugSpaceExhausted { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_the_resource() {
        let err = ApplicationError::missing("tag", "'rust'");
        assert_eq!(err.to_string(), "resource not found: tag 'rust' not found");
    }

    #[test]
    fn slug_conflicts_are_recognised() {
        let dup: ApplicationError = DomainError::DuplicateSlug("hello".into()).into();
        assert!(dup.is_slug_conflict());
        assert_eq!(dup.taken_slug().map(String::as_str), Some("hello"));

        let exhausted: ApplicationError = DomainError::SlugSpaceExhausted {
            base: "hello".into(),
            attempts: 1001,
        }
        .into();
        assert!(exhausted.is_slug_conflict());
        assert!(exhausted.taken_slug().is_none());

        assert!(!ApplicationError::conflict("tag exists").is_slug_conflict());
    }
}
