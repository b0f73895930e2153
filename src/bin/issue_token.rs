// src/bin/issue_token.rs
//! Mints a bearer token for local testing: `issue_token <user-id> [role] [display name]`.
use anyhow::{Context, Result, bail};
use newsroom_core::application::{dto::TokenSubject, ports::security::TokenManager};
use newsroom_core::config::AppConfig;
use newsroom_core::domain::user::{Role, UserId};
use newsroom_core::infrastructure::security::token::BiscuitTokenManager;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let mut args = std::env::args().skip(1);
    let Some(user_id) = args.next() else {
        bail!("usage: issue_token <user-id> [admin|editor|author] [display name]");
    };
    let role: Role = args
        .next()
        .as_deref()
        .unwrap_or("author")
        .parse()
        .context("unknown role")?;
    let display_name = args.next().unwrap_or_else(|| user_id.clone());

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let subject = TokenSubject::for_role(UserId::new(user_id)?, display_name, role);
    let token = manager.issue(subject).await?;

    println!("{}", token.token);
    eprintln!("expires at {}", token.expires_at.to_rfc3339());
    Ok(())
}
