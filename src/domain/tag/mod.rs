// src/domain/tag/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{NewTag, Tag, TagCode, TagId, TagWithCount};
pub use repository::TagRepository;
