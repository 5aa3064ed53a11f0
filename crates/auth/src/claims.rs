use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Payload of an access token.
///
/// Timestamps are numeric seconds since the epoch, the usual JWT registered
/// claim encoding. `iat` is informational; only `exp` participates in
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the authenticated username.
    pub sub: String,

    /// Role names granted to the subject at issuance time.
    pub roles: Vec<String>,

    /// Issued-at, seconds since the epoch.
    pub iat: i64,

    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl AccessClaims {
    pub fn new(sub: impl Into<String>, roles: Vec<String>, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: sub.into(),
            roles,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// A token is expired once its expiry is not strictly in the future.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// Role names converted into [`Role`] values, unfiltered.
    ///
    /// Callers that care about the process role vocabulary filter these
    /// against the configured hierarchy (see
    /// [`Authenticator`](crate::Authenticator)).
    pub fn role_claims(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().map(|name| Role::new(name.clone()))
    }
}
