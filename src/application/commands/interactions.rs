// src/application/commands/interactions.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto, ReactionSummaryDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        interaction::{CommentBody, InteractionRepository, NewComment, Reaction},
    },
};

pub struct InteractionCommandService {
    repo: Arc<dyn InteractionRepository>,
    articles: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
}

impl InteractionCommandService {
    pub fn new(
        repo: Arc<dyn InteractionRepository>,
        articles: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            articles,
            clock,
        }
    }

    async fn published_article(&self, id: &str) -> ApplicationResult<ArticleId> {
        let id = ArticleId::parse(id)?;
        match self.articles.find_by_id(id).await? {
            Some(article) if article.status.is_published() => Ok(id),
            _ => Err(ApplicationError::missing("article", &id)),
        }
    }

    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        article_id: &str,
        body: String,
    ) -> ApplicationResult<CommentDto> {
        let body = CommentBody::new(body)?;
        let article_id = self.published_article(article_id).await?;
        let comment = self
            .repo
            .add_comment(NewComment {
                article_id,
                user_id: actor.id.clone(),
                body,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(comment.into())
    }

    /// Records or replaces the caller's like/dislike and returns the new tally.
    pub async fn set_reaction(
        &self,
        actor: &AuthenticatedUser,
        article_id: &str,
        is_like: bool,
    ) -> ApplicationResult<ReactionSummaryDto> {
        let article_id = self.published_article(article_id).await?;
        let reaction = Reaction::from_flag(is_like);
        self.repo
            .set_reaction(article_id, &actor.id, reaction, self.clock.now())
            .await?;
        let tally = self.repo.tally(article_id).await?;
        Ok(ReactionSummaryDto::new(tally, Some(reaction)))
    }

    pub async fn remove_reaction(
        &self,
        actor: &AuthenticatedUser,
        article_id: &str,
    ) -> ApplicationResult<ReactionSummaryDto> {
        let article_id = self.published_article(article_id).await?;
        self.repo.remove_reaction(article_id, &actor.id).await?;
        let tally = self.repo.tally(article_id).await?;
        Ok(ReactionSummaryDto::new(tally, None))
    }
}
