// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use newsroom_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use newsroom_core::domain::user::{Role, UserId};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const OTHER_AUTHOR_TOKEN: &str = "other-author-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

fn user(id: &str, name: &str, role: Role) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        display_name: name.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub fn admin_user() -> AuthenticatedUser {
    user("admin-1", "Admin", Role::Admin)
}

pub fn editor_user() -> AuthenticatedUser {
    user("editor-1", "Editor", Role::Editor)
}

pub fn author_user() -> AuthenticatedUser {
    user("author-1", "Author", Role::Author)
}

pub fn other_author_user() -> AuthenticatedUser {
    user("author-2", "Other Author", Role::Author)
}

/// Maps the fixed token constants above to their users.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("{}-token", subject.role),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(admin_user()),
            EDITOR_TOKEN => Ok(editor_user()),
            AUTHOR_TOKEN => Ok(author_user()),
            OTHER_AUTHOR_TOKEN => Ok(other_author_user()),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
