pub mod entity;
pub mod filter;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, StatusUpdate};
pub use filter::{ArticleFilter, ArticleSort};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle};
