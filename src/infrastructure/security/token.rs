// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::parse_claims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    fmt::Write as _,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Signs and verifies Ed25519 biscuit tokens carrying the caller's identity,
/// role, and capability facts.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn build_code_and_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), subject.user_id.as_str().into());
    params.insert("uname".to_string(), subject.display_name.as_str().into());
    params.insert("urole".to_string(), subject.role.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r"
        user({uid}, {uname});
        role({urole});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
        ",
    );

    let mut capabilities: Vec<_> = subject.capabilities.iter().collect();
    capabilities.sort_by(|a, b| (&a.resource, &a.action).cmp(&(&b.resource, &b.action)));
    for cap in capabilities {
        let _ = writeln!(
            code,
            r#"right("{}", "{}");"#,
            escape_literal(&cap.resource),
            escape_literal(&cap.action)
        );
    }

    (code, params)
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .map(|d| d.num_seconds())
        .unwrap_or(i64::MAX)
        .max(0)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, issued_at, expires_at);

        let token = build_and_serialize_biscuit(&code, params, self.root.as_ref())?;
        tracing::debug!(user_id = %subject.user_id, role = %subject.role, "issued access token");

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // The embedded checks carry the validity window; the policy itself grants nothing extra.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserId};

    const TEST_KEY: &str = "4f1c2a9d7e3b5a6c8d0e1f2a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e";

    fn manager(ttl: Duration) -> BiscuitTokenManager {
        BiscuitTokenManager::new(TEST_KEY, ttl).unwrap()
    }

    #[tokio::test]
    async fn issued_token_authenticates_with_identity_and_rights() {
        let manager = manager(Duration::from_secs(600));
        let subject =
            TokenSubject::for_role(UserId::new("user-42").unwrap(), "Ada \"Quote\"", Role::Editor);
        let issued = manager.issue(subject).await.unwrap();
        assert_eq!(issued.expires_in, 600);

        let user = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.id.as_str(), "user-42");
        assert_eq!(user.display_name, "Ada \"Quote\"");
        assert_eq!(user.role, Role::Editor);
        assert!(user.has_capability("articles", "publish"));
        assert!(user.has_capability("tags", "manage"));
        assert!(!user.has_capability("categories", "manage"));
    }

    #[tokio::test]
    async fn garbage_and_foreign_tokens_are_rejected() {
        let manager = manager(Duration::from_secs(600));
        assert!(matches!(
            manager.authenticate("not-a-token").await,
            Err(ApplicationError::Unauthorized(_))
        ));

        let other = BiscuitTokenManager::new(&"1".repeat(64), Duration::from_secs(600)).unwrap();
        let subject = TokenSubject::for_role(UserId::new("u").unwrap(), "u", Role::Author);
        let foreign = other.issue(subject).await.unwrap();
        assert!(manager.authenticate(&foreign.token).await.is_err());
    }

    #[test]
    fn rejects_malformed_private_key() {
        assert!(BiscuitTokenManager::new("zz", Duration::from_secs(1)).is_err());
    }
}
