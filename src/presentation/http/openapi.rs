// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::list_public_articles,
        crate::presentation::http::controllers::articles::search_articles,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::publish_article,
        crate::presentation::http::controllers::articles::add_article_tags,
        crate::presentation::http::controllers::articles::remove_article_tags,
        crate::presentation::http::controllers::interactions::list_comments,
        crate::presentation::http::controllers::interactions::add_comment,
        crate::presentation::http::controllers::interactions::get_likes,
        crate::presentation::http::controllers::interactions::set_like,
        crate::presentation::http::controllers::interactions::remove_like,
        crate::presentation::http::controllers::tags::list_tags,
        crate::presentation::http::controllers::tags::tag_counts,
        crate::presentation::http::controllers::tags::get_tag,
        crate::presentation::http::controllers::tags::create_tag,
        crate::presentation::http::controllers::tags::update_tag,
        crate::presentation::http::controllers::tags::delete_tag,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::category_counts,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::ArticleTagsRequest,
            crate::presentation::http::controllers::tags::CreateTagRequest,
            crate::presentation::http::controllers::tags::UpdateTagRequest,
            crate::presentation::http::controllers::categories::CategoryRequest,
            crate::presentation::http::controllers::interactions::CommentRequest,
            crate::presentation::http::controllers::interactions::ReactionRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::TagDto,
            crate::application::dto::TagCountDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryCountDto,
            crate::application::dto::CommentDto,
            crate::application::dto::ReactionSummaryDto
        )
    ),
    tags(
        (name = "Articles", description = "Article authoring, listing and search"),
        (name = "Tags", description = "Tag catalogue"),
        (name = "Categories", description = "Category tree"),
        (name = "Interactions", description = "Comments and likes"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Newsroom API",
        description = "Content-management backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls = server_urls(env::var("PUBLIC_API_URLS").ok().as_deref());
        if !urls.iter().any(|url| url == DEFAULT_SERVER_URL) {
            urls.push(DEFAULT_SERVER_URL.to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

fn server_urls(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.trim_end_matches('/').to_string())
            .collect()
    })
    .unwrap_or_default()
}

/// Swagger UI also serves the raw document at `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
