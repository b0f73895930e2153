// src/domain/article/filter.rs
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::category::CategoryId;
use crate::domain::tag::TagCode;
use crate::domain::user::UserId;

/// Sort key for article listings. Both orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    #[default]
    CreatedAt,
    PublishedAt,
}

impl ArticleSort {
    /// `"published_at"` selects publish order; every other key, including an
    /// empty one, falls back to creation order.
    pub fn from_key(key: &str) -> Self {
        if key.trim() == "published_at" {
            Self::PublishedAt
        } else {
            Self::CreatedAt
        }
    }
}

/// Restrictions and paging window shared by the page query and its count.
///
/// Every `None` / empty field means "no restriction". Soft-deleted articles are
/// always excluded. `tags` matches articles carrying any of the listed codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub category_id: Option<CategoryId>,
    pub author_id: Option<UserId>,
    pub tags: Vec<TagCode>,
    /// Case-insensitive substring matched against title or body.
    pub text: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub sort: ArticleSort,
}

impl ArticleFilter {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_author(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagCode>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        self.text = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn sorted_by(mut self, sort: ArticleSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn has_tag_filter(&self) -> bool {
        !self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_published_at_key_selects_publish_order() {
        assert_eq!(ArticleSort::from_key("published_at"), ArticleSort::PublishedAt);
        assert_eq!(ArticleSort::from_key(""), ArticleSort::CreatedAt);
        assert_eq!(ArticleSort::from_key("title"), ArticleSort::CreatedAt);
        assert_eq!(ArticleSort::from_key("PUBLISHED_AT"), ArticleSort::CreatedAt);
    }

    #[test]
    fn blank_text_is_no_restriction() {
        let filter = ArticleFilter::new(10, 0).with_text("   ");
        assert!(filter.text.is_none());
        let filter = ArticleFilter::new(10, 0).with_text("  rust ");
        assert_eq!(filter.text.as_deref(), Some("rust"));
    }
}
