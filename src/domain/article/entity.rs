// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
};
use crate::domain::category::CategoryId;
use crate::domain::tag::TagCode;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub category_id: Option<CategoryId>,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Moves the article to `status`. Every entry into `Published` restamps
    /// `published_at`; leaving it keeps the last stamp.
    /// Returns `false` when the article already had that status.
    pub fn transition_to(&mut self, status: ArticleStatus, now: DateTime<Utc>) -> bool {
        if self.status == status {
            return false;
        }
        if status.is_published() {
            self.published_at = Some(now);
        }
        self.status = status;
        self.updated_at = now;
        true
    }

    pub fn set_slug(&mut self, slug: ArticleSlug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }

    pub fn set_category(&mut self, category_id: Option<CategoryId>, now: DateTime<Utc>) {
        self.category_id = category_id;
        self.updated_at = now;
    }

    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub category_id: Option<CategoryId>,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Associated in the same write as the row; unknown codes are skipped.
    pub tags: Vec<TagCode>,
}

#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub body: Option<ArticleBody>,
    pub category_id: Option<Option<CategoryId>>,
    pub status: Option<StatusUpdate>,
    /// Replaces the whole tag set in the same write when present.
    pub tags: Option<Vec<TagCode>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub const fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            category_id: None,
            status: None,
            tags: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_status(
        mut self,
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.status = Some(StatusUpdate {
            status,
            published_at,
        });
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagCode>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.body.is_none()
            && self.category_id.is_none()
            && self.status.is_none()
            && self.tags.is_none()
    }
}
