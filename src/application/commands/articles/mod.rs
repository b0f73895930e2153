// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod publish;
mod service;
mod tags;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use publish::PublishArticleCommand;
pub use service::ArticleCommandService;
pub use tags::ArticleTagsCommand;
pub use update::UpdateArticleCommand;
