// src/presentation/http/controllers/tags.rs
use std::collections::BTreeMap;

use crate::application::{
    commands::tags::{CreateTagCommand, UpdateTagCommand},
    dto::{OffsetPage, TagCountDto, TagDto},
    queries::tags::ListTagsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
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
pub struct TagListParams {
    /// Defaults to 20, capped at 100.
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Substring of the code or of any localized name.
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TagCountParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTagRequest {
    pub code: String,
    pub name: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTagRequest {
    /// New code; keeps the current one when absent.
    #[serde(default)]
    pub code: Option<String>,
    pub name: BTreeMap<String, String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    params(TagListParams),
    responses((status = 200, description = "Page of tags.", body = OffsetPage<TagDto>)),
    tag = "Tags"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TagListParams>,
) -> HttpResult<Json<OffsetPage<TagDto>>> {
    let query = ListTagsQuery {
        limit: params.limit,
        offset: params.offset,
        search: params.search,
    };
    state
        .services
        .tag_queries
        .list_tags(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/counts",
    params(TagCountParams),
    responses((status = 200, description = "Published-article count per tag.", body = Vec<TagCountDto>)),
    tag = "Tags"
)]
pub async fn tag_counts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TagCountParams>,
) -> HttpResult<Json<Vec<TagCountDto>>> {
    state
        .services
        .tag_queries
        .tag_counts(params.limit)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/{code}",
    params(("code" = String, Path, description = "Tag code")),
    responses(
        (status = 200, description = "Tag.", body = TagDto),
        (status = 404, description = "Unknown tag.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn get_tag(
    Extension(state): Extension<HttpState>,
    Path(code): Path<String>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .tag_queries
        .get_tag(&code)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created.", body = TagDto),
        (status = 403, description = "Missing tags:manage.", body = ErrorResponse),
        (status = 409, description = "Code already exists.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTagRequest>,
) -> HttpResult<(StatusCode, Json<TagDto>)> {
    let command = CreateTagCommand {
        code: payload.code,
        name: payload.name,
    };
    state
        .services
        .tag_commands
        .create_tag(&user, command)
        .await
        .into_http()
        .map(|tag| (StatusCode::CREATED, Json(tag)))
}

#[utoipa::path(
    put,
    path = "/api/v1/tags/{code}",
    params(("code" = String, Path, description = "Tag code")),
    request_body = UpdateTagRequest,
    responses(
        (status = 200, description = "Tag updated.", body = TagDto),
        (status = 404, description = "Unknown tag.", body = ErrorResponse),
        (status = 409, description = "New code already exists.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn update_tag(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(code): Path<String>,
    Json(payload): Json<UpdateTagRequest>,
) -> HttpResult<Json<TagDto>> {
    let command = UpdateTagCommand {
        code,
        new_code: payload.code,
        name: payload.name,
    };
    state
        .services
        .tag_commands
        .update_tag(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/tags/{code}",
    params(("code" = String, Path, description = "Tag code")),
    responses(
        (status = 204, description = "Tag deleted."),
        (status = 404, description = "Unknown tag.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(code): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .tag_commands
        .delete_tag(&user, &code)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
