// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            interactions::InteractionCommandService, tags::TagCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationResult,
        ports::{security::TokenManager, time::Clock, util::SlugGenerator},
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            interactions::InteractionQueryService, tags::TagQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        category::CategoryRepository,
        interaction::InteractionRepository,
        tag::TagRepository,
    },
};

/// Storage adapters the application services are built over.
#[derive(Clone)]
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub interactions: Arc<dyn InteractionRepository>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub tag_commands: Arc<TagCommandService>,
    pub tag_queries: Arc<TagQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub interaction_commands: Arc<InteractionCommandService>,
    pub interaction_queries: Arc<InteractionQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_read),
            slugger,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            slug_service,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&repos.article_read)));

        let tag_commands = Arc::new(TagCommandService::new(Arc::clone(&repos.tags)));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&repos.tags)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&repos.categories)));

        let interaction_commands = Arc::new(InteractionCommandService::new(
            Arc::clone(&repos.interactions),
            Arc::clone(&repos.article_read),
            clock,
        ));
        let interaction_queries = Arc::new(InteractionQueryService::new(
            repos.interactions,
            repos.article_read,
        ));

        Self {
            article_commands,
            article_queries,
            tag_commands,
            tag_queries,
            category_commands,
            category_queries,
            interaction_commands,
            interaction_queries,
            token_manager,
        }
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
