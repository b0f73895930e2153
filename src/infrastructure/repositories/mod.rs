// src/infrastructure/repositories/mod.rs
mod articles;
mod error;
mod postgres_article;
mod postgres_category;
mod postgres_interaction;
mod postgres_tag;

pub use articles::{ARTICLE_COLUMNS, ArticleQueryBuilder};
pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_interaction::PostgresInteractionRepository;
pub use postgres_tag::PostgresTagRepository;
