// src/domain/article/services/slug.rs
use std::sync::Arc;

use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Highest numeric suffix tried before giving up on a base slug.
pub const MAX_SLUG_SUFFIX: u32 = 1000;

/// Base used when a title has no characters that survive slug derivation.
pub const FALLBACK_SLUG_BASE: &str = "article";

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Domain service responsible for producing unique slugs for articles.
///
/// The probe is a read-then-write sequence and is not atomic with the
/// following insert or update; the store's unique index on live slugs is the
/// real guarantee.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn base_slug(&self, title: &ArticleTitle) -> String {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            FALLBACK_SLUG_BASE.to_string()
        } else {
            base
        }
    }

    /// Returns the first of `base`, `base-1`, `base-2`, ... that no other live
    /// article holds. The article identified by `ignore_id` is always allowed to
    /// keep its own slug.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base_slug = self.base_slug(title);

        for suffix in 0..=MAX_SLUG_SUFFIX {
            let candidate = if suffix == 0 {
                base_slug.clone()
            } else {
                format!("{base_slug}-{suffix}")
            };
            let slug = ArticleSlug::new(candidate)?;

            match self.read_repo.find_by_slug(&slug).await? {
                None => return Ok(slug),
                Some(existing) if ignore_id == Some(existing.id) => return Ok(slug),
                Some(existing) => {
                    tracing::debug!(slug = %slug, holder = %existing.id, "slug taken, probing next suffix");
                }
            }
        }

        tracing::warn!(base = %base_slug, "slug suffix space exhausted");
        Err(DomainError::SlugSpaceExhausted {
            base: base_slug,
            attempts: MAX_SLUG_SUFFIX + 1,
        })
    }
}
