pub mod article;
pub mod category;
pub mod errors;
pub mod interaction;
pub mod localized;
pub mod tag;
pub mod user;
