// src/domain/interaction/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentBody, CommentId, NewComment, Reaction, ReactionTally};
pub use repository::InteractionRepository;
