use super::{
    ArticleQueryService,
    service::{parse_category, parse_tags},
};
use crate::{
    application::{
        dto::{ArticleDto, Page, PageRequest, pagination::PUBLIC_PAGE_SIZE},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleFilter, ArticleSort, ArticleStatus},
};

pub const MIN_SEARCH_CHARS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct SearchArticlesQuery {
    pub query: String,
    pub category_id: Option<String>,
    pub tags: Vec<String>,
    pub page: PageRequest,
}

impl ArticleQueryService {
    /// Case-insensitive substring search over published titles and bodies.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let text = query.query.trim();
        if text.chars().count() < MIN_SEARCH_CHARS {
            return Err(ApplicationError::validation(format!(
                "search query must be at least {MIN_SEARCH_CHARS} characters"
            )));
        }

        let (page, page_size, offset) = query.page.resolve(PUBLIC_PAGE_SIZE);
        let mut filter = ArticleFilter::new(page_size, offset)
            .with_status(ArticleStatus::Published)
            .with_tags(parse_tags(&query.tags)?)
            .with_text(text)
            .sorted_by(ArticleSort::PublishedAt);
        if let Some(category_id) = parse_category(query.category_id.as_deref())? {
            filter = filter.with_category(category_id);
        }

        self.fetch_page(&filter, page, true).await
    }
}
