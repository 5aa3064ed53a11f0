//! Deployment variants.
//!
//! Two deployments share the auth core but differ in role vocabulary, route
//! table, and seeded users. Each variant supplies its hierarchy edge list and
//! credential table here; the auth crate stays vocabulary-agnostic.

use std::str::FromStr;

use osiedle_auth::{Credential, InMemoryCredentialRepository, Role, RoleHierarchy};

use crate::guard::RouteTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Condominium deployment: MIESZKANIEC < ZARZAD < ADMINISTRATOR.
    Osiedle,
    /// Template deployment: USER < MODERATOR < ADMINISTRATOR.
    Demo,
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "osiedle" => Ok(Self::Osiedle),
            "demo" => Ok(Self::Demo),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Osiedle => f.write_str("osiedle"),
            Self::Demo => f.write_str("demo"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown variant '{0}', expected 'osiedle' or 'demo'")]
pub struct UnknownVariant(String);

/// Everything variant-specific the app wiring needs.
pub struct VariantProfile {
    pub hierarchy: RoleHierarchy,
    pub credentials: InMemoryCredentialRepository,
    pub routes: RouteTable,
}

pub fn build_profile(variant: Variant) -> anyhow::Result<VariantProfile> {
    match variant {
        Variant::Osiedle => osiedle_profile(),
        Variant::Demo => demo_profile(),
    }
}

fn osiedle_profile() -> anyhow::Result<VariantProfile> {
    let hierarchy = RoleHierarchy::builder()
        .implies("ZARZAD", "MIESZKANIEC")
        .implies("ADMINISTRATOR", "ZARZAD")
        .build()?;

    // Fixed test users; a real deployment would back the repository with a
    // database behind the same trait.
    let credentials = InMemoryCredentialRepository::new([
        Credential::new("1", "mieszkaniec", "mieszkaniec123", vec![Role::new("MIESZKANIEC")])?,
        Credential::new(
            "2",
            "zarzad",
            "zarzad123",
            vec![Role::new("MIESZKANIEC"), Role::new("ZARZAD")],
        )?,
        Credential::new(
            "3",
            "administrator",
            "admin123",
            vec![Role::new("MIESZKANIEC"), Role::new("ZARZAD"), Role::new("ADMINISTRATOR")],
        )?,
    ]);

    let routes = RouteTable::new()
        .public("/_status")
        .public("/login")
        .require("/mieszkaniec", "MIESZKANIEC")
        .require("/zarzad", "ZARZAD")
        .require("/administrator", "ADMINISTRATOR");

    Ok(VariantProfile { hierarchy, credentials, routes })
}

fn demo_profile() -> anyhow::Result<VariantProfile> {
    let hierarchy = RoleHierarchy::builder()
        .implies("MODERATOR", "USER")
        .implies("ADMINISTRATOR", "MODERATOR")
        .build()?;

    let credentials = InMemoryCredentialRepository::new([
        Credential::new("1", "user", "user123", vec![Role::new("USER")])?,
        Credential::new(
            "2",
            "moderator",
            "moderator123",
            vec![Role::new("USER"), Role::new("MODERATOR")],
        )?,
        Credential::new(
            "3",
            "administrator",
            "admin123",
            vec![Role::new("USER"), Role::new("MODERATOR"), Role::new("ADMINISTRATOR")],
        )?,
    ]);

    let routes = RouteTable::new()
        .public("/_status")
        .public("/login")
        .require("/user", "USER")
        .require("/moderator", "MODERATOR")
        .require("/administrator", "ADMINISTRATOR");

    Ok(VariantProfile { hierarchy, credentials, routes })
}
