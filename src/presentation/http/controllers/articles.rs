// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ArticleTagsCommand, CreateArticleCommand, DeleteArticleCommand, PublishArticleCommand,
        UpdateArticleCommand,
    },
    dto::{ArticleDto, Page, PageRequest},
    queries::articles::{
        GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery, ListPublicArticlesQuery,
        SearchArticlesQuery,
    },
};
use crate::presentation::http::controllers::{double_option, split_list};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// `DRAFT`, `PUBLISHED`, or `ARCHIVED`.
    pub status: Option<String>,
    pub category_id: Option<String>,
    pub author_id: Option<String>,
    /// Comma-separated tag codes; an article matches when it carries any of them.
    pub tags: Option<String>,
    /// `published_at` for publish order; anything else sorts by creation time.
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PublicArticleParams {
    pub category_id: Option<String>,
    pub tags: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// At least two characters after trimming.
    #[serde(default)]
    pub q: String,
    pub category_id: Option<String>,
    pub tags: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    /// Derived from the title when absent or blank.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    /// An empty string regenerates the slug from the title.
    pub slug: Option<String>,
    /// `null` detaches the article from its category.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub category_id: Option<Option<String>>,
    pub status: Option<String>,
    /// Replaces the whole tag set when present.
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleTagsRequest {
    pub tags: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Filtered page of articles.", body = Page<ArticleDto>),
        (status = 400, description = "Invalid filter value.", body = ErrorResponse),
        (status = 403, description = "Draft listing without view rights.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    let query = ListArticlesQuery {
        status: params.status,
        category_id: params.category_id,
        author_id: params.author_id,
        tags: split_list(params.tags.as_deref()),
        sort: params.sort_by,
        page: PageRequest::new(params.page, params.page_size),
    };

    state
        .services
        .article_queries
        .list_articles(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/public",
    params(PublicArticleParams),
    responses(
        (status = 200, description = "Published articles with preview bodies.", body = Page<ArticleDto>)
    ),
    tag = "Articles"
)]
pub async fn list_public_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PublicArticleParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    let query = ListPublicArticlesQuery {
        category_id: params.category_id,
        tags: split_list(params.tags.as_deref()),
        page: PageRequest::new(params.page, params.page_size),
    };

    state
        .services
        .article_queries
        .list_public_articles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Published articles matching the text.", body = Page<ArticleDto>),
        (status = 400, description = "Query shorter than two characters.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    let query = SearchArticlesQuery {
        query: params.q,
        category_id: params.category_id,
        tags: split_list(params.tags.as_deref()),
        page: PageRequest::new(params.page, params.page_size),
    };

    state
        .services
        .article_queries
        .search_articles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article.", body = ArticleDto),
        (status = 404, description = "Unknown or not visible.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(actor.0.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article.", body = ArticleDto),
        (status = 404, description = "Unknown or not visible.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(actor.0.as_ref(), GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
        slug: payload.slug,
        category_id: payload.category_id,
        status: payload.status,
        tag_codes: payload.tags,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 403, description = "Not allowed to edit.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        body: payload.body,
        slug: payload.slug,
        category_id: payload.category_id,
        status: payload.status,
        tag_codes: payload.tags,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article soft-deleted."),
        (status = 403, description = "Not allowed to delete.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article published.", body = ArticleDto),
        (status = 403, description = "Missing articles:publish.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .publish_article(&user, PublishArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/tags",
    params(("id" = String, Path, description = "Article id")),
    request_body = ArticleTagsRequest,
    responses(
        (status = 200, description = "Tags attached.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn add_article_tags(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<ArticleTagsRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .add_article_tags(
            &user,
            ArticleTagsCommand {
                id,
                tag_codes: payload.tags,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}/tags",
    params(("id" = String, Path, description = "Article id")),
    request_body = ArticleTagsRequest,
    responses(
        (status = 200, description = "Tags detached.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn remove_article_tags(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<ArticleTagsRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .remove_article_tags(
            &user,
            ArticleTagsCommand {
                id,
                tag_codes: payload.tags,
            },
        )
        .await
        .into_http()
        .map(Json)
}
