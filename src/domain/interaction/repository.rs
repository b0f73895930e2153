// src/domain/interaction/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::interaction::entity::{Comment, NewComment, Reaction, ReactionTally};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    async fn add_comment(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Newest first.
    async fn list_comments(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    /// One reaction per user and article; a second call replaces the first.
    async fn set_reaction(
        &self,
        article_id: ArticleId,
        user_id: &UserId,
        reaction: Reaction,
        at: DateTime<Utc>,
    ) -> DomainResult<()>;
    async fn remove_reaction(&self, article_id: ArticleId, user_id: &UserId) -> DomainResult<()>;
    async fn tally(&self, article_id: ArticleId) -> DomainResult<ReactionTally>;
    async fn find_reaction(
        &self,
        article_id: ArticleId,
        user_id: &UserId,
    ) -> DomainResult<Option<Reaction>>;
}
