// src/domain/category/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryCode, CategoryId, CategoryUpdate, CategoryWithCount, NewCategory};
pub use repository::CategoryRepository;
