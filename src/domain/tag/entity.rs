// src/domain/tag/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::localized::LocalizedName;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub Uuid);

/// Stable, lowercase tag identifier used in filters and URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagCode(String);

impl TagCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::Validation("tag code cannot be empty".into()));
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(format!(
                "tag code '{normalized}' cannot contain whitespace"
            )));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub code: TagCode,
    pub name: LocalizedName,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub code: TagCode,
    pub name: LocalizedName,
}

#[derive(Debug, Clone)]
pub struct TagWithCount {
    pub code: TagCode,
    pub article_count: u64,
}
