// src/presentation/http/controllers/categories.rs
use std::collections::BTreeMap;

use crate::application::{
    commands::categories::{CreateCategoryCommand, UpdateCategoryCommand},
    dto::{CategoryCountDto, CategoryDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub code: String,
    pub name: BTreeMap<String, String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "Active categories.", body = Vec<CategoryDto>)),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/counts",
    responses((status = 200, description = "Published-article count per category.", body = Vec<CategoryCountDto>)),
    tag = "Categories"
)]
pub async fn category_counts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryCountDto>>> {
    state
        .services
        .category_queries
        .category_counts()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category.", body = CategoryDto),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category(&id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 403, description = "Missing categories:manage.", body = ErrorResponse),
        (status = 409, description = "Code already in use.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let command = CreateCategoryCommand {
        code: payload.code,
        name: payload.name,
        parent_id: payload.parent_id,
    };
    state
        .services
        .category_commands
        .create_category(&user, command)
        .await
        .into_http()
        .map(|category| (StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 404, description = "Unknown category.", body = ErrorResponse),
        (status = 409, description = "Code already in use.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<CategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = UpdateCategoryCommand {
        id,
        code: payload.code,
        name: payload.name,
        parent_id: payload.parent_id,
    };
    state
        .services
        .category_commands
        .update_category(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category soft-deleted."),
        (status = 404, description = "Unknown category.", body = ErrorResponse),
        (status = 409, description = "Category still has active children.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .category_commands
        .delete_category(&user, &id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
