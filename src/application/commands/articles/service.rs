// src/application/commands/articles/service.rs
use std::sync::Arc;

use tracing::warn;

use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
            ArticleWriteRepository,
            specifications::{ArticleSpecification, CanUpdateArticleSpec},
            services::ArticleSlugService,
        },
        errors::DomainError,
        tag::TagCode,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::missing("article", &id))
    }

    pub(super) async fn load_for_update(
        &self,
        actor: &AuthenticatedUser,
        id: ArticleId,
    ) -> ApplicationResult<Article> {
        let article = self.load(id).await?;
        let rule = CanUpdateArticleSpec::new(&actor.capabilities, &article, &actor.id);
        if !rule.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update article",
            ));
        }
        Ok(article)
    }

    pub(super) async fn to_dto(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let mut tags = self.read_repo.tags_for(&[article.id]).await?;
        let codes = tags.remove(&article.id).unwrap_or_default();
        Ok(ArticleDto::from_parts(article, codes))
    }

    /// Runs `write` once, and when it fails with a slug collision on an
    /// auto-assigned slug, probes again and retries exactly once.
    pub(super) async fn with_slug_retry<F, Fut>(
        &self,
        auto_slug: Option<(&ArticleTitle, Option<ArticleId>)>,
        slug: ArticleSlug,
        write: F,
    ) -> ApplicationResult<Article>
    where
        F: Fn(ArticleSlug) -> Fut,
        Fut: Future<Output = Result<Article, DomainError>>,
    {
        match write(slug).await {
            Err(DomainError::DuplicateSlug(taken)) => {
                let Some((title, ignore_id)) = auto_slug else {
                    return Err(DomainError::DuplicateSlug(taken).into());
                };
                warn!(slug = %taken, "slug claimed concurrently; re-probing once");
                let fresh = self
                    .slug_service
                    .generate_unique_slug(title, ignore_id)
                    .await?;
                Ok(write(fresh).await?)
            }
            other => Ok(other?),
        }
    }

    pub(super) fn parse_tag_codes(codes: Vec<String>) -> ApplicationResult<Vec<TagCode>> {
        let mut parsed = codes
            .into_iter()
            .map(TagCode::new)
            .collect::<Result<Vec<_>, _>>()?;
        parsed.sort();
        parsed.dedup();
        Ok(parsed)
    }
}
