use crate::domain::article::{Article, services::markdown_preview};
use crate::domain::tag::TagCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub body: String,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    pub author_id: String,
    /// `DRAFT`, `PUBLISHED`, or `ARCHIVED`.
    pub status: String,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ArticleDto {
    pub fn from_parts(article: Article, tags: Vec<TagCode>) -> Self {
        Self {
            id: article.id.as_uuid(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            body: article.body.into_inner(),
            category_id: article.category_id.map(|id| id.as_uuid()),
            author_id: article.author_id.into(),
            status: article.status.as_str().to_string(),
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            tags: tags.into_iter().map(TagCode::into_inner).collect(),
        }
    }

    /// Replaces the Markdown body with its plain-text preview.
    #[must_use]
    pub fn into_preview(mut self) -> Self {
        self.body = markdown_preview(&self.body);
        self
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self::from_parts(article, Vec::new())
    }
}
