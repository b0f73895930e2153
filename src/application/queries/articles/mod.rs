mod get_by_id;
mod get_by_slug;
mod list;
mod search;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::{ListArticlesQuery, ListPublicArticlesQuery};
pub use search::{MIN_SEARCH_CHARS, SearchArticlesQuery};
pub use service::ArticleQueryService;
