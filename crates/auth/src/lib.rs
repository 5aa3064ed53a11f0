//! `osiedle-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it knows how
//! to verify passwords, mint and verify bearer tokens, and answer role
//! implication questions, but it never touches a request or a database.

pub mod authenticate;
pub mod claims;
pub mod credentials;
pub mod hierarchy;
pub mod principal;
pub mod roles;
pub mod token;

pub use authenticate::{AuthFailure, Authenticator};
pub use claims::AccessClaims;
pub use credentials::{Credential, CredentialError, CredentialRepository, InMemoryCredentialRepository};
pub use hierarchy::{HierarchyError, RoleHierarchy, RoleHierarchyBuilder};
pub use principal::Principal;
pub use roles::Role;
pub use token::{TokenError, TokenService};
