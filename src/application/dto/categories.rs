use crate::domain::category::{Category, CategoryWithCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: Uuid,
    pub code: String,
    pub name: BTreeMap<String, String>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.as_uuid(),
            code: category.code.into_inner(),
            name: category.name.into_inner(),
            parent_id: category.parent_id.map(|id| id.as_uuid()),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCountDto {
    pub id: Uuid,
    pub code: String,
    pub name: BTreeMap<String, String>,
    pub article_count: u64,
}

impl From<CategoryWithCount> for CategoryCountDto {
    fn from(value: CategoryWithCount) -> Self {
        Self {
            id: value.id.as_uuid(),
            code: value.code.into_inner(),
            name: value.name.into_inner(),
            article_count: value.article_count,
        }
    }
}
