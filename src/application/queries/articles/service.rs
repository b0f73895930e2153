use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            Article, ArticleFilter, ArticleReadRepository,
            specifications::{ArticleSpecification, CanViewArticleSpec},
        },
        category::CategoryId,
        tag::TagCode,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Runs the page query and its count over the same filter and attaches
    /// tag codes to every item.
    pub(super) async fn fetch_page(
        &self,
        filter: &ArticleFilter,
        page: u32,
        preview: bool,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let records = self.read_repo.find_page(filter).await?;
        let total = self.read_repo.count_matching(filter).await?;

        let ids: Vec<_> = records.iter().map(|article| article.id).collect();
        let mut tags = self.read_repo.tags_for(&ids).await?;

        let items = records
            .into_iter()
            .map(|article| {
                let codes = tags.remove(&article.id).unwrap_or_default();
                let dto = ArticleDto::from_parts(article, codes);
                if preview { dto.into_preview() } else { dto }
            })
            .collect();

        Ok(Page::new(items, total, page, filter.limit))
    }

    pub(super) async fn visible(
        &self,
        actor: Option<&AuthenticatedUser>,
        article: Option<Article>,
        what: &str,
    ) -> ApplicationResult<ArticleDto> {
        let article = article
            .filter(|article| {
                CanViewArticleSpec::new(actor.map(|a| (&a.capabilities, &a.id)), article)
                    .is_satisfied()
            })
            .ok_or_else(|| ApplicationError::missing("article", what))?;

        let mut tags = self.read_repo.tags_for(&[article.id]).await?;
        let codes = tags.remove(&article.id).unwrap_or_default();
        Ok(ArticleDto::from_parts(article, codes))
    }
}

pub(super) fn parse_category(raw: Option<&str>) -> ApplicationResult<Option<CategoryId>> {
    Ok(raw
        .filter(|value| !value.trim().is_empty())
        .map(CategoryId::parse)
        .transpose()?)
}

pub(super) fn parse_tags(raw: &[String]) -> ApplicationResult<Vec<TagCode>> {
    let mut tags = raw
        .iter()
        .filter(|code| !code.trim().is_empty())
        .map(|code| TagCode::new(code.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    tags.sort();
    tags.dedup();
    Ok(tags)
}
