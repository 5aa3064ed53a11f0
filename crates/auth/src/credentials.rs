//! Credential store: fixed username → (password hash, role set) table.
//!
//! The repository is an injected dependency rather than a process-wide
//! global, so a database-backed implementation can replace the in-memory one
//! without touching the auth logic.

use std::collections::HashMap;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

use crate::Role;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// A stored login credential. Created at process start, immutable afterwards;
/// there is no registration or update path.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: String,
    pub username: String,
    password_hash: String,
    pub roles: Vec<Role>,
}

impl Credential {
    /// Hash `password` with argon2 and a fresh random salt.
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        password: &str,
        roles: Vec<Role>,
    ) -> Result<Self, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError::Hash(e.to_string()))?
            .to_string();

        Ok(Self {
            id: id.into(),
            username: username.into(),
            password_hash,
            roles,
        })
    }

    pub fn verify_password(&self, presented: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(presented.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Lookup contract for credentials.
///
/// Unknown usernames are not an error; the caller decides failure semantics
/// (login collapses unknown user and wrong password into one response).
pub trait CredentialRepository: Send + Sync {
    /// Exact-match, case-sensitive lookup.
    fn find_by_username(&self, username: &str) -> Option<&Credential>;
}

/// In-memory repository seeded once at startup.
#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    users: HashMap<String, Credential>,
}

impl InMemoryCredentialRepository {
    pub fn new(credentials: impl IntoIterator<Item = Credential>) -> Self {
        Self {
            users: credentials
                .into_iter()
                .map(|c| (c.username.clone(), c))
                .collect(),
        }
    }
}

impl CredentialRepository for InMemoryCredentialRepository {
    fn find_by_username(&self, username: &str) -> Option<&Credential> {
        self.users.get(username)
    }
}
