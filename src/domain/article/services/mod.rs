// src/domain/article/services/mod.rs
mod preview;
mod slug;

pub use preview::{PREVIEW_MAX_CHARS, PREVIEW_MAX_LINES, markdown_preview};
pub use slug::{ArticleSlugService, FALLBACK_SLUG_BASE, MAX_SLUG_SUFFIX, SlugGenerator};
