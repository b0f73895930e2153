use crate::domain::tag::{Tag, TagWithCount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: Uuid,
    pub code: String,
    /// Display names keyed by language code.
    pub name: BTreeMap<String, String>,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.0,
            code: tag.code.into_inner(),
            name: tag.name.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagCountDto {
    pub code: String,
    pub article_count: u64,
}

impl From<TagWithCount> for TagCountDto {
    fn from(value: TagWithCount) -> Self {
        Self {
            code: value.code.into_inner(),
            article_count: value.article_count,
        }
    }
}
