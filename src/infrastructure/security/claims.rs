// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::{
    collections::HashSet,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Rebuilds the caller from the authority facts of a verified token.
/// Explicit `right` facts are merged with the role's defaults.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let user_id = UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("blank user id"))?;
    let display_name = ctx.display_name.unwrap_or_default();
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let mut capabilities = role.default_capabilities();
    capabilities.extend(ctx.capabilities);

    Ok(AuthenticatedUser {
        id: user_id,
        display_name,
        role,
        capabilities,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<String>,
    display_name: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: HashSet<Capability>,
}

fn date_term(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = Self::default();
        for fact in facts {
            ctx.apply_predicate(&fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => {
                if let [Term::Str(id), Term::Str(name)] = predicate.terms.as_slice() {
                    self.user_id = Some(id.clone());
                    self.display_name = Some(name.clone());
                }
            }
            "role" => {
                if let Some(Term::Str(name)) = predicate.terms.first() {
                    self.role = name.parse().ok();
                }
            }
            "issued_at" => self.issued_at = date_term(predicate),
            "expires_at" => self.expires_at = date_term(predicate),
            "right" => {
                if let [Term::Str(resource), Term::Str(action)] = predicate.terms.as_slice() {
                    self.capabilities
                        .insert(Capability::new(resource.clone(), action.clone()));
                }
            }
            _ => {}
        }
    }
}
