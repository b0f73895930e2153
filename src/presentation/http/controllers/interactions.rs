// src/presentation/http/controllers/interactions.rs
use crate::application::dto::{CommentDto, ReactionSummaryDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub body: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReactionRequest {
    /// `true` for like, `false` for dislike.
    pub is_like: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Comments, newest first.", body = Vec<CommentDto>),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Interactions"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .interaction_queries
        .list_comments(&id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = String, Path, description = "Article id")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentDto),
        (status = 400, description = "Blank body.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Interactions"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    state
        .services
        .interaction_commands
        .add_comment(&user, &id, payload.body)
        .await
        .into_http()
        .map(|comment| (StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/likes",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Like and dislike totals.", body = ReactionSummaryDto),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Interactions"
)]
pub async fn get_likes(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ReactionSummaryDto>> {
    state
        .services
        .interaction_queries
        .reaction_summary(actor.0.as_ref(), &id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/likes",
    params(("id" = String, Path, description = "Article id")),
    request_body = ReactionRequest,
    responses(
        (status = 200, description = "Reaction recorded.", body = ReactionSummaryDto),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Interactions"
)]
pub async fn set_like(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<ReactionRequest>,
) -> HttpResult<Json<ReactionSummaryDto>> {
    state
        .services
        .interaction_commands
        .set_reaction(&user, &id, payload.is_like)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}/likes",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Reaction removed.", body = ReactionSummaryDto),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Interactions"
)]
pub async fn remove_like(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ReactionSummaryDto>> {
    state
        .services
        .interaction_commands
        .remove_reaction(&user, &id)
        .await
        .into_http()
        .map(Json)
}
