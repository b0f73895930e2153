// tests/support/mocks/mod.rs
pub mod security;
pub mod store;
pub mod time;

pub use security::{
    ADMIN_TOKEN, AUTHOR_TOKEN, DummyTokenManager, EDITOR_TOKEN, EXPIRED_TOKEN,
    OTHER_AUTHOR_TOKEN, admin_user, author_user, editor_user, other_author_user,
};
pub use store::InMemoryStore;
pub use time::{FixedClock, fixed_now};
