use super::{
    ArticleQueryService,
    service::{parse_category, parse_tags},
};
use crate::{
    application::{
        dto::{
            ArticleDto, AuthenticatedUser, Page, PageRequest,
            pagination::{DEFAULT_PAGE_SIZE, PUBLIC_PAGE_SIZE},
        },
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleSort, ArticleStatus},
        user::UserId,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub category_id: Option<String>,
    pub author_id: Option<String>,
    pub tags: Vec<String>,
    /// `published_at` or anything else for creation order.
    pub sort: Option<String>,
    pub page: PageRequest,
}

#[derive(Debug, Clone, Default)]
pub struct ListPublicArticlesQuery {
    pub category_id: Option<String>,
    pub tags: Vec<String>,
    pub page: PageRequest,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let (page, page_size, offset) = query.page.resolve(DEFAULT_PAGE_SIZE);

        let requested = query
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<ArticleStatus>)
            .transpose()?;
        let author_id = query
            .author_id
            .filter(|s| !s.trim().is_empty())
            .map(UserId::new)
            .transpose()?;
        let status = resolve_status(actor, requested, author_id.as_ref())?;

        let mut filter = ArticleFilter::new(page_size, offset)
            .with_tags(parse_tags(&query.tags)?)
            .sorted_by(ArticleSort::from_key(query.sort.as_deref().unwrap_or_default()));
        if let Some(status) = status {
            filter = filter.with_status(status);
        }
        if let Some(category_id) = parse_category(query.category_id.as_deref())? {
            filter = filter.with_category(category_id);
        }
        if let Some(author_id) = author_id {
            filter = filter.with_author(author_id);
        }

        self.fetch_page(&filter, page, false).await
    }

    /// Published articles in publish order with Markdown-free preview bodies.
    pub async fn list_public_articles(
        &self,
        query: ListPublicArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let (page, page_size, offset) = query.page.resolve(PUBLIC_PAGE_SIZE);
        let mut filter = ArticleFilter::new(page_size, offset)
            .with_status(ArticleStatus::Published)
            .with_tags(parse_tags(&query.tags)?)
            .sorted_by(ArticleSort::PublishedAt);
        if let Some(category_id) = parse_category(query.category_id.as_deref())? {
            filter = filter.with_category(category_id);
        }

        self.fetch_page(&filter, page, true).await
    }
}

/// Callers without `articles:view:drafts` only see published articles, unless
/// they are listing their own.
fn resolve_status(
    actor: Option<&AuthenticatedUser>,
    requested: Option<ArticleStatus>,
    author_id: Option<&UserId>,
) -> ApplicationResult<Option<ArticleStatus>> {
    let privileged = actor.is_some_and(|actor| {
        actor.has_capability("articles", "view:drafts") || author_id == Some(&actor.id)
    });
    if privileged {
        return Ok(requested);
    }
    match requested {
        None | Some(ArticleStatus::Published) => Ok(Some(ArticleStatus::Published)),
        Some(_) if actor.is_none() => Ok(Some(ArticleStatus::Published)),
        Some(_) => Err(ApplicationError::forbidden(
            "missing capability articles:view:drafts",
        )),
    }
}
