// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleId, ArticleStatus, ArticleUpdate},
};

pub struct PublishArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Publishing an already published article returns it unchanged.
    pub async fn publish_article(
        &self,
        actor: &AuthenticatedUser,
        command: PublishArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "publish")?;
        let id = ArticleId::parse(&command.id)?;
        let mut article = self.load(id).await?;
        let original_updated_at = article.updated_at;

        let now = self.clock.now();
        if !article.transition_to(ArticleStatus::Published, now) {
            return self.to_dto(article).await;
        }

        let mut update = ArticleUpdate::new(id, original_updated_at)
            .with_status(article.status, article.published_at);
        update.set_updated_at(article.updated_at);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %id, "article published");
        self.to_dto(updated).await
    }
}
