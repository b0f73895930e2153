pub mod articles;
pub mod auth;
pub mod categories;
pub mod interactions;
pub mod pagination;
pub mod serde_time;
pub mod tags;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::{CategoryCountDto, CategoryDto};
pub use interactions::{CommentDto, ReactionSummaryDto};
pub use pagination::{OffsetPage, Page, PageRequest};
pub use tags::{TagCountDto, TagDto};
