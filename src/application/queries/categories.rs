// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryCountDto, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryRepository},
};

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.repo.list_active().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category(&self, id: &str) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::parse(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::missing("category", &id))
    }

    pub async fn category_counts(&self) -> ApplicationResult<Vec<CategoryCountDto>> {
        let counts = self.repo.list_with_counts().await?;
        Ok(counts.into_iter().map(Into::into).collect())
    }
}
