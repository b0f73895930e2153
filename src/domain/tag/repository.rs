// src/domain/tag/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::localized::LocalizedName;
use crate::domain::tag::entity::{NewTag, Tag, TagCode, TagWithCount};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Returns one page of tags ordered by code plus the total matching `search`.
    async fn list_page(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Tag>, u64)>;
    async fn find_by_code(&self, code: &TagCode) -> DomainResult<Option<Tag>>;
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn update(
        &self,
        code: &TagCode,
        new_code: TagCode,
        name: LocalizedName,
    ) -> DomainResult<Tag>;
    async fn delete(&self, code: &TagCode) -> DomainResult<()>;
    /// Tags attached to at least one published, non-deleted article.
    async fn list_with_counts(&self, limit: Option<u32>) -> DomainResult<Vec<TagWithCount>>;
}
