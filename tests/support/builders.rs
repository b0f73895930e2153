// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use newsroom_core::domain::{
    article::{Article, ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle},
    category::CategoryId,
    localized::LocalizedName,
    user::UserId,
};
use std::collections::BTreeMap;

use super::mocks::fixed_now;

/// Builds stored articles directly, for seeding the in-memory store.
pub struct ArticleSeed {
    article: Article,
}

impl ArticleSeed {
    pub fn new(title: &str, slug: &str) -> Self {
        let now = fixed_now();
        Self {
            article: Article {
                id: ArticleId::generate(),
                title: ArticleTitle::new(title).unwrap(),
                slug: ArticleSlug::new(slug).unwrap(),
                body: ArticleBody::new(format!("Body of {title}")).unwrap(),
                category_id: None,
                author_id: UserId::new("author-1").unwrap(),
                status: ArticleStatus::Draft,
                published_at: None,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
        }
    }

    pub fn body(mut self, body: &str) -> Self {
        self.article.body = ArticleBody::new(body).unwrap();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.article.author_id = UserId::new(author).unwrap();
        self
    }

    pub fn category(mut self, category: CategoryId) -> Self {
        self.article.category_id = Some(category);
        self
    }

    /// Published `minutes_ago` minutes before the fixed clock.
    pub fn published(mut self, minutes_ago: i64) -> Self {
        self.article.status = ArticleStatus::Published;
        self.article.published_at = Some(fixed_now() - Duration::minutes(minutes_ago));
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.article.status = status;
        self
    }

    pub fn created(mut self, minutes_ago: i64) -> Self {
        let at: DateTime<Utc> = fixed_now() - Duration::minutes(minutes_ago);
        self.article.created_at = at;
        self.article.updated_at = at;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.article.deleted_at = Some(fixed_now());
        self
    }

    pub fn build(self) -> Article {
        self.article
    }
}

pub fn english_name(name: &str) -> LocalizedName {
    LocalizedName::new(BTreeMap::from([("en".to_string(), name.to_string())])).unwrap()
}

pub fn name_map(name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("en".to_string(), name.to_string())])
}
