mod query;

pub(crate) use query::escape_like;
pub use query::{ARTICLE_COLUMNS, ArticleQueryBuilder};
