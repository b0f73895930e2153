// src/domain/category/repository.rs
use crate::domain::category::entity::{
    Category, CategoryCode, CategoryId, CategoryUpdate, CategoryWithCount, NewCategory,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_active(&self) -> DomainResult<Vec<Category>>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn code_in_use(
        &self,
        code: &CategoryCode,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool>;
    async fn has_active_children(&self, id: CategoryId) -> DomainResult<bool>;
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn soft_delete(&self, id: CategoryId) -> DomainResult<()>;
    /// Active categories with the number of published, non-deleted articles in each.
    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>>;
}
