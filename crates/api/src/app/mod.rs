//! HTTP application wiring (axum router + state).
//!
//! Layout:
//! - `routes/`: handlers, one file per area
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: uniform error responses

use std::sync::Arc;

use axum::{Extension, Router};
use chrono::Duration;
use tower::ServiceBuilder;

use osiedle_auth::{Authenticator, CredentialRepository, TokenService};

use crate::config::AppConfig;
use crate::middleware::{self, GuardState};
use crate::variant;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared handler state.
pub struct AppState {
    pub credentials: Arc<dyn CredentialRepository>,
    pub tokens: TokenService,
    pub commit: String,
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let profile = variant::build_profile(config.variant)?;

    let tokens = TokenService::new(&config.jwt_secret, Duration::milliseconds(config.jwt_ttl_ms));
    let hierarchy = Arc::new(profile.hierarchy);

    let guard = GuardState {
        authenticator: Arc::new(Authenticator::new(tokens.clone(), hierarchy.clone())),
        hierarchy,
        routes: Arc::new(profile.routes),
    };

    let state = Arc::new(AppState {
        credentials: Arc::new(profile.credentials),
        tokens,
        commit: config.commit.clone(),
    });

    // The guard sees every request and bypasses itself on public routes, so
    // the whole router sits behind one filter chain.
    Ok(routes::router(config.variant).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn_with_state(
                guard,
                middleware::guard_middleware,
            ))
            .layer(Extension(state)),
    ))
}
