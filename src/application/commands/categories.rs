// src/application/commands/categories.rs
use std::{collections::BTreeMap, sync::Arc};

use crate::{
    application::{
        commands::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{CategoryCode, CategoryId, CategoryRepository, CategoryUpdate, NewCategory},
        localized::LocalizedName,
    },
};

pub struct CreateCategoryCommand {
    pub code: String,
    pub name: BTreeMap<String, String>,
    pub parent_id: Option<String>,
}

pub struct UpdateCategoryCommand {
    pub id: String,
    pub code: String,
    pub name: BTreeMap<String, String>,
    pub parent_id: Option<String>,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    async fn ensure_parent(&self, parent_id: Option<CategoryId>) -> ApplicationResult<()> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };
        if self.repo.find_by_id(parent_id).await?.is_none() {
            return Err(ApplicationError::validation(format!(
                "parent category {parent_id} does not exist"
            )));
        }
        Ok(())
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;
        let code = CategoryCode::new(command.code)?;
        let name = LocalizedName::new(command.name)?;
        let parent_id = command
            .parent_id
            .as_deref()
            .map(CategoryId::parse)
            .transpose()?;

        if self.repo.code_in_use(&code, None).await? {
            return Err(ApplicationError::conflict(format!(
                "category code '{}' already in use",
                code.as_str()
            )));
        }
        self.ensure_parent(parent_id).await?;

        let created = self
            .repo
            .insert(NewCategory {
                code,
                name,
                parent_id,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(created.into())
    }

    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;
        let id = CategoryId::parse(&command.id)?;
        let code = CategoryCode::new(command.code)?;
        let name = LocalizedName::new(command.name)?;
        let parent_id = command
            .parent_id
            .as_deref()
            .map(CategoryId::parse)
            .transpose()?;

        if parent_id == Some(id) {
            return Err(ApplicationError::validation(
                "category cannot be its own parent",
            ));
        }
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::missing("category", &id));
        }
        if self.repo.code_in_use(&code, Some(id)).await? {
            return Err(ApplicationError::conflict(format!(
                "category code '{}' already in use",
                code.as_str()
            )));
        }
        self.ensure_parent(parent_id).await?;

        let updated = self
            .repo
            .update(CategoryUpdate {
                id,
                code,
                name,
                parent_id,
                updated_at: self.clock.now(),
            })
            .await?;
        Ok(updated.into())
    }

    /// Soft-deletes the category; refused while it still has active children.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "categories", "manage")?;
        let id = CategoryId::parse(id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::missing("category", &id));
        }
        if self.repo.has_active_children(id).await? {
            return Err(ApplicationError::conflict(
                "cannot delete category with active children",
            ));
        }
        self.repo.soft_delete(id).await?;
        Ok(())
    }
}
