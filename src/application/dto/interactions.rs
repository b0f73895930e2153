use crate::domain::interaction::{Comment, Reaction, ReactionTally};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: String,
    pub body: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.0,
            article_id: comment.article_id.as_uuid(),
            user_id: comment.user_id.into(),
            body: comment.body.into_inner(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReactionSummaryDto {
    pub likes: u64,
    pub dislikes: u64,
    /// The caller's own reaction: `true` for like, `false` for dislike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_reaction: Option<bool>,
}

impl ReactionSummaryDto {
    pub fn new(tally: ReactionTally, own: Option<Reaction>) -> Self {
        Self {
            likes: tally.likes,
            dislikes: tally.dislikes,
            user_reaction: own.map(Reaction::is_like),
        }
    }
}
