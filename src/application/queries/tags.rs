// src/application/queries/tags.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{OffsetPage, TagCountDto, TagDto, pagination::MAX_PAGE_SIZE},
        error::{ApplicationError, ApplicationResult},
    },
    domain::tag::{TagCode, TagRepository},
};

pub const DEFAULT_TAG_LIMIT: u32 = 20;

#[derive(Debug, Clone, Default)]
pub struct ListTagsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Matched against the code and every localized name.
    pub search: Option<String>,
}

pub struct TagQueryService {
    repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_tags(&self, query: ListTagsQuery) -> ApplicationResult<OffsetPage<TagDto>> {
        let limit = query
            .limit
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_TAG_LIMIT)
            .min(MAX_PAGE_SIZE);
        let offset = query.offset.unwrap_or(0);
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let (tags, total) = self.repo.list_page(limit, offset, search).await?;
        let items = tags.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, total, limit, offset))
    }

    pub async fn get_tag(&self, code: &str) -> ApplicationResult<TagDto> {
        let code = TagCode::new(code)?;
        self.repo
            .find_by_code(&code)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::missing("tag", format!("'{code}'")))
    }

    /// Tags in use by published articles, most used first.
    pub async fn tag_counts(&self, limit: Option<u32>) -> ApplicationResult<Vec<TagCountDto>> {
        let limit = limit.filter(|l| *l > 0).map(|l| l.min(MAX_PAGE_SIZE));
        let counts = self.repo.list_with_counts(limit).await?;
        Ok(counts.into_iter().map(Into::into).collect())
    }
}
