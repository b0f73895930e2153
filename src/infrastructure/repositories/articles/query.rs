// src/infrastructure/repositories/articles/query.rs
//! SQL composition for filtered article listings.
//!
//! The page query and the count query are built from the same predicate
//! routine so that `total` always describes the rows a page is cut from.
use sqlx::{Postgres, QueryBuilder};

use crate::domain::article::{ArticleFilter, ArticleSort};

pub const ARTICLE_COLUMNS: &str = "a.id, a.title, a.slug, a.body, a.category_id, a.author_id, \
     a.status, a.published_at, a.created_at, a.updated_at, a.deleted_at";

pub struct ArticleQueryBuilder<'f> {
    filter: &'f ArticleFilter,
}

impl<'f> ArticleQueryBuilder<'f> {
    pub const fn new(filter: &'f ArticleFilter) -> Self {
        Self { filter }
    }

    /// Distinct matching articles, ordered and windowed.
    pub fn page_query(&self) -> QueryBuilder<'f, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        if self.filter.has_tag_filter() {
            // The tag join yields one row per matching tag.
            builder.push("DISTINCT ");
        }
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles a");
        self.push_predicates(&mut builder);
        self.push_order(&mut builder);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(self.filter.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(self.filter.offset));
        builder
    }

    /// Number of distinct matching articles; window and sort are ignored.
    pub fn count_query(&self) -> QueryBuilder<'f, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(DISTINCT a.id) FROM articles a");
        self.push_predicates(&mut builder);
        builder
    }

    fn push_predicates(&self, builder: &mut QueryBuilder<'f, Postgres>) {
        let filter = self.filter;

        if filter.has_tag_filter() {
            builder.push(
                " JOIN article_tags at ON at.article_id = a.id JOIN tags t ON t.id = at.tag_id",
            );
        }

        builder.push(" WHERE a.deleted_at IS NULL");

        if let Some(status) = filter.status {
            builder.push(" AND a.status = ");
            builder.push_bind(status.as_str());
        }

        if let Some(category_id) = filter.category_id {
            builder.push(" AND a.category_id = ");
            builder.push_bind(category_id.as_uuid());
        }

        if let Some(author_id) = &filter.author_id {
            builder.push(" AND a.author_id = ");
            builder.push_bind(author_id.as_str());
        }

        if filter.has_tag_filter() {
            let codes: Vec<String> = filter.tags.iter().map(|code| code.as_str().to_owned()).collect();
            builder.push(" AND t.code = ANY(");
            builder.push_bind(codes);
            builder.push(")");
        }

        if let Some(text) = &filter.text {
            let pattern = format!("%{}%", escape_like(text));
            builder.push(" AND (a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.body ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    fn push_order(&self, builder: &mut QueryBuilder<'f, Postgres>) {
        match self.filter.sort {
            ArticleSort::PublishedAt => {
                builder.push(" ORDER BY a.published_at DESC NULLS LAST, a.id DESC");
            }
            ArticleSort::CreatedAt => {
                builder.push(" ORDER BY a.created_at DESC, a.id DESC");
            }
        }
    }
}

pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
