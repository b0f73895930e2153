// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use newsroom_core::application::{
    ports::{security::TokenManager, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, Repositories},
};
use newsroom_core::domain::article::{Article, services::ArticleSlugService};
use newsroom_core::infrastructure::util::AsciiSlugGenerator;
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

use super::mocks::{DummyTokenManager, FixedClock, InMemoryStore};

pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let repos = Repositories {
            article_write: store.clone(),
            article_read: store.clone(),
            tags: store.clone(),
            categories: store.clone(),
            interactions: store.clone(),
        };
        let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager);
        let clock: Arc<dyn Clock> = Arc::new(FixedClock);
        let slugger: Arc<dyn SlugGenerator> = Arc::new(AsciiSlugGenerator);
        let services = Arc::new(ApplicationServices::new(repos, token_manager, clock, slugger));
        Self { store, services }
    }

    pub fn slug_service(&self) -> ArticleSlugService {
        ArticleSlugService::new(self.store.clone(), Arc::new(AsciiSlugGenerator))
    }

    pub fn seed(&self, article: Article, tags: &[&str]) -> Article {
        self.store.put_article(article.clone(), tags);
        article
    }

    pub fn router(&self) -> Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &[])
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Asserts an `ErrorResponse` body with the expected status and reason.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = body_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected a non-empty message"
    );
}
