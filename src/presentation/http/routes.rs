// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, categories, interactions, tags},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(article_routes())
        .merge(tag_routes())
        .merge(category_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn article_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/v1/articles/public", get(articles::list_public_articles))
        .route("/api/v1/articles/search", get(articles::search_articles))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/publish",
            post(articles::publish_article),
        )
        .route(
            "/api/v1/articles/{id}/tags",
            post(articles::add_article_tags).delete(articles::remove_article_tags),
        )
        .route(
            "/api/v1/articles/{id}/comments",
            get(interactions::list_comments).post(interactions::add_comment),
        )
        .route(
            "/api/v1/articles/{id}/likes",
            get(interactions::get_likes)
                .put(interactions::set_like)
                .delete(interactions::remove_like),
        )
}

fn tag_routes() -> Router {
    Router::new()
        .route("/api/v1/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/api/v1/tags/counts", get(tags::tag_counts))
        .route(
            "/api/v1/tags/{code}",
            get(tags::get_tag)
                .put(tags::update_tag)
                .delete(tags::delete_tag),
        )
}

fn category_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/api/v1/categories/counts", get(categories::category_counts))
        .route(
            "/api/v1/categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
}

/// `*` or an empty list allows any origin; otherwise only the listed ones.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
