// src/domain/category/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::localized::LocalizedName;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(Uuid);

impl CategoryId {
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid category id '{value}'")))
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryCode(String);

impl CategoryCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::Validation("category code cannot be empty".into()));
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

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub code: CategoryCode,
    pub name: LocalizedName,
    pub parent_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub code: CategoryCode,
    pub name: LocalizedName,
    pub parent_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub code: CategoryCode,
    pub name: LocalizedName,
    pub parent_id: Option<CategoryId>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryWithCount {
    pub id: CategoryId,
    pub code: CategoryCode,
    pub name: LocalizedName,
    pub article_count: u64,
}
