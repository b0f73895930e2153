// src/infrastructure/repositories/postgres_interaction.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::interaction::{
    Comment, CommentBody, CommentId, InteractionRepository, NewComment, Reaction, ReactionTally,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresInteractionRepository {
    pool: PgPool,
}

impl PostgresInteractionRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: Uuid,
    article_id: Uuid,
    user_id: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId(row.id),
            article_id: ArticleId::from_uuid(row.article_id),
            user_id: UserId::new(row.user_id)?,
            body: CommentBody::new(row.body)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TallyRow {
    likes: i64,
    dislikes: i64,
}

#[async_trait]
impl InteractionRepository for PostgresInteractionRepository {
    async fn add_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, user_id, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, article_id, user_id, body, created_at, updated_at",
        )
        .bind(comment.article_id.as_uuid())
        .bind(comment.user_id.as_str())
        .bind(comment.body.as_str())
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Comment::try_from(row)
    }

    async fn list_comments(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, user_id, body, created_at, updated_at
             FROM comments WHERE article_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(article_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn set_reaction(
        &self,
        article_id: ArticleId,
        user_id: &UserId,
        reaction: Reaction,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO article_likes (article_id, user_id, is_like, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             ON CONFLICT (article_id, user_id)
             DO UPDATE SET is_like = EXCLUDED.is_like, updated_at = EXCLUDED.updated_at",
        )
        .bind(article_id.as_uuid())
        .bind(user_id.as_str())
        .bind(reaction.is_like())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove_reaction(&self, article_id: ArticleId, user_id: &UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM article_likes WHERE article_id = $1 AND user_id = $2")
            .bind(article_id.as_uuid())
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn tally(&self, article_id: ArticleId) -> DomainResult<ReactionTally> {
        let row = sqlx::query_as::<_, TallyRow>(
            "SELECT COUNT(*) FILTER (WHERE is_like) AS likes,
                    COUNT(*) FILTER (WHERE NOT is_like) AS dislikes
             FROM article_likes WHERE article_id = $1",
        )
        .bind(article_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(ReactionTally {
            likes: u64::try_from(row.likes).unwrap_or_default(),
            dislikes: u64::try_from(row.dislikes).unwrap_or_default(),
        })
    }

    async fn find_reaction(
        &self,
        article_id: ArticleId,
        user_id: &UserId,
    ) -> DomainResult<Option<Reaction>> {
        let flag = sqlx::query_scalar::<_, bool>(
            "SELECT is_like FROM article_likes WHERE article_id = $1 AND user_id = $2",
        )
        .bind(article_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(flag.map(Reaction::from_flag))
    }
}
