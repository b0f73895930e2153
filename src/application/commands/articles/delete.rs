// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleId,
        specifications::{ArticleSpecification, CanDeleteArticleSpec},
    },
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::parse(&command.id)?;
        let article = self.load(id).await?;

        let delete_spec = CanDeleteArticleSpec::new(&actor.capabilities, &article, &actor.id);

        if !delete_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete article",
            ));
        }

        self.write_repo.soft_delete(id, self.clock.now()).await?;
        tracing::info!(article_id = %id, "article soft-deleted");
        Ok(())
    }
}
