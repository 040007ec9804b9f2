//! Caller identity and role guards.
//!
//! Interactive login happens elsewhere; this service only resolves a bearer
//! token to a [`Principal`] using a static table loaded at start-up. Every
//! known token is a `user`; tokens whose email is listed as an admin also
//! carry `admin`.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub email: String,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthConfigError {
    #[error("malformed token entry '{0}', expected 'token=email'")]
    MalformedEntry(String),

    #[error("token for '{0}' is listed more than once")]
    DuplicateToken(String),
}

/// Token → email table plus the set of admin emails.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    tokens: HashMap<String, String>,
    admins: HashSet<String>,
}

impl AuthConfig {
    /// Parse `tokens` as comma-separated `token=email` pairs and `admins` as a
    /// comma-separated email list. Admin emails match case-insensitively.
    pub fn parse(tokens: &str, admins: &str) -> Result<Self, AuthConfigError> {
        let mut table = HashMap::new();
        for entry in tokens.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (token, email) = entry
                .split_once('=')
                .map(|(t, e)| (t.trim(), e.trim()))
                .filter(|(t, e)| !t.is_empty() && !e.is_empty())
                .ok_or_else(|| AuthConfigError::MalformedEntry(entry.to_string()))?;

            if table.insert(token.to_string(), email.to_string()).is_some() {
                return Err(AuthConfigError::DuplicateToken(email.to_string()));
            }
        }

        let admins = admins
            .split(',')
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Ok(Self {
            tokens: table,
            admins,
        })
    }

    pub fn resolve(&self, token: &str) -> Option<Principal> {
        let email = self.tokens.get(token)?;
        let mut roles = vec![Role::User];
        if self.admins.contains(&email.to_lowercase()) {
            roles.push(Role::Admin);
        }
        Some(Principal {
            email: email.clone(),
            roles,
        })
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Middleware: attach the [`Principal`] for a valid bearer token to the
/// request. Requests without one pass through anonymously; the role guards
/// decide whether that is acceptable.
pub async fn authenticate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|value| value.trim().to_string());

    if let Some(token) = token {
        match state.auth.resolve(&token) {
            Some(principal) => {
                debug!(email = %principal.email, "authenticated request");
                request.extensions_mut().insert(principal);
            }
            None => warn!("rejected unknown bearer token"),
        }
    }

    next.run(request).await
}

/// Extractor that requires an authenticated caller with the `user` role.
#[derive(Debug, Clone)]
pub struct RequireUser(pub Principal);

/// Extractor that requires the `admin` role.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Principal);

fn principal_with(parts: &Parts, role: Role) -> Result<Principal, ApiError> {
    match parts.extensions.get::<Principal>() {
        Some(principal) if principal.has_role(role) => Ok(principal.clone()),
        Some(principal) => {
            warn!(email = %principal.email, ?role, uri = %parts.uri, "access denied");
            Err(ApiError::Forbidden("Access Denied"))
        }
        None => {
            warn!(?role, uri = %parts.uri, "anonymous access denied");
            Err(ApiError::Forbidden("Access Denied"))
        }
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        principal_with(parts, Role::User).map(Self)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        principal_with(parts, Role::Admin).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_resolve_to_user_and_listed_admins() {
        let auth = AuthConfig::parse(
            "u-token=student@ucsb.edu, a-token=Prof@ucsb.edu",
            "prof@ucsb.edu",
        )
        .unwrap();

        assert_eq!(auth.token_count(), 2);

        let student = auth.resolve("u-token").unwrap();
        assert_eq!(student.email, "student@ucsb.edu");
        assert_eq!(student.roles, vec![Role::User]);

        let prof = auth.resolve("a-token").unwrap();
        assert!(prof.has_role(Role::User));
        assert!(prof.has_role(Role::Admin));

        assert_eq!(auth.resolve("nope"), None);
    }

    #[test]
    fn empty_configuration_is_valid() {
        let auth = AuthConfig::parse("", "").unwrap();
        assert_eq!(auth.token_count(), 0);
    }

    #[test]
    fn malformed_and_duplicate_entries_are_rejected() {
        assert_eq!(
            AuthConfig::parse("just-a-token", "").unwrap_err(),
            AuthConfigError::MalformedEntry("just-a-token".into())
        );
        assert_eq!(
            AuthConfig::parse("t=a@ucsb.edu,t=b@ucsb.edu", "").unwrap_err(),
            AuthConfigError::DuplicateToken("b@ucsb.edu".into())
        );
    }
}
