//! Environment-sourced configuration for the API process.

use std::str::FromStr;

use crate::variant::Variant;

/// Runtime configuration.
///
/// Everything the auth core consumes (signing secret, token TTL, variant
/// selection) is supplied here rather than hardcoded.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub jwt_secret: String,
    /// Token validity window in milliseconds.
    pub jwt_ttl_ms: i64,
    /// Commit identifier reported by `/_status`.
    pub commit: String,
    pub variant: Variant,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret-change-me-32-bytes-min".to_string()
        });

        let jwt_ttl_ms = std::env::var("JWT_EXPIRATION_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3_600_000);

        let variant = std::env::var("APP_VARIANT")
            .ok()
            .and_then(|v| Variant::from_str(&v).ok())
            .unwrap_or(Variant::Osiedle);

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            jwt_secret,
            jwt_ttl_ms,
            commit: std::env::var("COMMIT_NUMBER").unwrap_or_else(|_| "unknown".to_string()),
            variant,
        }
    }
}
