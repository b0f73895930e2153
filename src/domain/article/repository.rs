// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::tag::TagCode;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Writes the row and its tag associations atomically.
    /// Fails with `DomainError::DuplicateSlug` when another live article holds the slug.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Applies field changes and, when present, the replacement tag set atomically.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn soft_delete(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<()>;
    /// Unknown tag codes are skipped; existing associations are left untouched.
    async fn add_tags(&self, id: ArticleId, tags: &[TagCode]) -> DomainResult<()>;
    async fn remove_tags(&self, id: ArticleId, tags: &[TagCode]) -> DomainResult<()>;
}

/// Every read excludes soft-deleted articles.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Distinct matching articles, ordered and windowed per the filter.
    async fn find_page(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;
    /// Distinct matching articles, ignoring the window and sort.
    async fn count_matching(&self, filter: &ArticleFilter) -> DomainResult<u64>;
    async fn tags_for(
        &self,
        ids: &[ArticleId],
    ) -> DomainResult<HashMap<ArticleId, Vec<TagCode>>>;
}
