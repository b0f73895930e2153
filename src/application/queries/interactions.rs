// src/application/queries/interactions.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto, ReactionSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        interaction::InteractionRepository,
    },
};

pub struct InteractionQueryService {
    repo: Arc<dyn InteractionRepository>,
    articles: Arc<dyn ArticleReadRepository>,
}

impl InteractionQueryService {
    pub fn new(
        repo: Arc<dyn InteractionRepository>,
        articles: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self { repo, articles }
    }

    async fn published_article(&self, id: &str) -> ApplicationResult<ArticleId> {
        let id = ArticleId::parse(id)?;
        match self.articles.find_by_id(id).await? {
            Some(article) if article.status.is_published() => Ok(id),
            _ => Err(ApplicationError::missing("article", &id)),
        }
    }

    pub async fn list_comments(&self, article_id: &str) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = self.published_article(article_id).await?;
        let comments = self.repo.list_comments(article_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    /// Like and dislike totals; the caller's own reaction is included when
    /// they are authenticated.
    pub async fn reaction_summary(
        &self,
        actor: Option<&AuthenticatedUser>,
        article_id: &str,
    ) -> ApplicationResult<ReactionSummaryDto> {
        let article_id = self.published_article(article_id).await?;
        let tally = self.repo.tally(article_id).await?;
        let own = match actor {
            Some(actor) => self.repo.find_reaction(article_id, &actor.id).await?,
            None => None,
        };
        Ok(ReactionSummaryDto::new(tally, own))
    }
}
