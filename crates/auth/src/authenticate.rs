//! Authentication manager: presented token → authenticated [`Principal`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{Principal, Role, RoleHierarchy, TokenService};

/// Opaque authentication failure.
///
/// Which verification step failed (malformed token, bad signature, expiry) is
/// deliberately not carried past this boundary; it surfaces uniformly as 401.
/// The detail is logged at `debug` for operators.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("authentication failed")]
pub struct AuthFailure;

/// Turns bearer tokens into principals.
pub struct Authenticator {
    tokens: TokenService,
    hierarchy: Arc<RoleHierarchy>,
}

impl Authenticator {
    pub fn new(tokens: TokenService, hierarchy: Arc<RoleHierarchy>) -> Self {
        Self { tokens, hierarchy }
    }

    /// Verify the token and build a principal from its claims.
    ///
    /// Role names outside the configured hierarchy are dropped silently
    /// (fail-open forward compatibility); a token carrying only unknown
    /// roles still authenticates but passes no role gate.
    pub fn authenticate(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, AuthFailure> {
        let claims = self.tokens.verify(token, now).map_err(|err| {
            tracing::debug!(reason = %err, "token rejected");
            AuthFailure
        })?;

        let (known, unknown): (Vec<Role>, Vec<Role>) = claims
            .role_claims()
            .partition(|role| self.hierarchy.knows(role));
        if !unknown.is_empty() {
            tracing::debug!(subject = %claims.sub, dropped = ?unknown, "unknown role names in claims");
        }

        Ok(Principal::new(claims.sub, known))
    }
}
