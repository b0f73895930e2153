// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("slug already exists: {0}")]
    DuplicateSlug(String),
    #[error("slug space exhausted for '{base}' after {attempts} attempts")]
    SlugSpaceExhausted { base: String, attempts: u32 },
}
