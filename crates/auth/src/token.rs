//! Token service: HS256 issuance and verification of access tokens.
//!
//! The signing key is owned exclusively by this service and is immutable
//! after construction. Verification is pure CPU work; `now` is injected so
//! the expiry boundary can be exercised deterministically.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::{AccessClaims, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Not a three-segment compact token, or the payload is not valid JSON.
    #[error("token is malformed")]
    Malformed,

    /// The signature does not match the header and payload.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// `exp` is not strictly in the future.
    #[error("token has expired")]
    Expired,

    /// Serialization of the claims failed during issuance.
    #[error("token could not be signed")]
    Signing,
}

/// Issues and verifies compact HS256 tokens.
///
/// Cloning is cheap; the keys are shared.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
    ttl: Duration,
}

impl TokenService {
    /// `ttl` is the configured validity window for issued tokens.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller-supplied `now`, not the wall
        // clock, so the library's own exp handling is turned off.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = Default::default();

        Self {
            encoding_key: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding_key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            validation: Arc::new(validation),
            ttl,
        }
    }

    /// Mint a token for an already-authenticated identity.
    ///
    /// This service never sees passwords; callers authenticate against the
    /// credential store first.
    pub fn issue(&self, username: &str, roles: &[Role], now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = AccessClaims::new(
            username,
            roles.iter().map(|r| r.as_str().to_string()).collect(),
            now,
            now + self.ttl,
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::Signing)
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// `iat` is carried through informationally and not checked.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, TokenError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        if data.claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
