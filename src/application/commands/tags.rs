// src/application/commands/tags.rs
use std::{collections::BTreeMap, sync::Arc};

use crate::{
    application::{
        commands::ensure_capability,
        dto::{AuthenticatedUser, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        localized::LocalizedName,
        tag::{NewTag, TagCode, TagRepository},
    },
};

pub struct CreateTagCommand {
    pub code: String,
    pub name: BTreeMap<String, String>,
}

pub struct UpdateTagCommand {
    pub code: String,
    /// Renames the tag when present.
    pub new_code: Option<String>,
    pub name: BTreeMap<String, String>,
}

pub struct TagCommandService {
    repo: Arc<dyn TagRepository>,
}

impl TagCommandService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_tag(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTagCommand,
    ) -> ApplicationResult<TagDto> {
        ensure_capability(actor, "tags", "manage")?;
        let tag = NewTag {
            code: TagCode::new(command.code)?,
            name: LocalizedName::new(command.name)?,
        };
        if self.repo.find_by_code(&tag.code).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "tag '{}' already exists",
                tag.code
            )));
        }
        let created = self.repo.insert(tag).await?;
        Ok(created.into())
    }

    pub async fn update_tag(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTagCommand,
    ) -> ApplicationResult<TagDto> {
        ensure_capability(actor, "tags", "manage")?;
        let code = TagCode::new(command.code)?;
        let name = LocalizedName::new(command.name)?;
        let new_code = command
            .new_code
            .map(TagCode::new)
            .transpose()?
            .unwrap_or_else(|| code.clone());

        if self.repo.find_by_code(&code).await?.is_none() {
            return Err(ApplicationError::missing("tag", format!("'{code}'")));
        }
        if new_code != code && self.repo.find_by_code(&new_code).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "tag '{new_code}' already exists"
            )));
        }

        let updated = self.repo.update(&code, new_code, name).await?;
        Ok(updated.into())
    }

    pub async fn delete_tag(&self, actor: &AuthenticatedUser, code: &str) -> ApplicationResult<()> {
        ensure_capability(actor, "tags", "manage")?;
        let code = TagCode::new(code)?;
        if self.repo.find_by_code(&code).await?.is_none() {
            return Err(ApplicationError::missing("tag", format!("'{code}'")));
        }
        self.repo.delete(&code).await?;
        Ok(())
    }
}
