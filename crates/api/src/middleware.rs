//! Per-request authentication/authorization gate.
//!
//! Every failure mode (missing token, bad token, insufficient role) maps to
//! the same empty 401; nothing about which step failed leaks to the client.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use osiedle_auth::{Authenticator, RoleHierarchy};

use crate::context::PrincipalContext;
use crate::guard::{RouteAccess, RouteTable};

#[derive(Clone)]
pub struct GuardState {
    pub authenticator: Arc<Authenticator>,
    pub hierarchy: Arc<RoleHierarchy>,
    pub routes: Arc<RouteTable>,
}

pub async fn guard_middleware(
    State(state): State<GuardState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let access = state.routes.access_for(req.uri().path());

    if access == RouteAccess::Public {
        return Ok(next.run(req).await);
    }

    let token = extract_bearer(req.headers())?;

    let principal = state
        .authenticator
        .authenticate(token, Utc::now())
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    if let RouteAccess::Role(required) = access {
        if !principal.satisfies(&state.hierarchy, &required) {
            tracing::debug!(
                subject = %principal.username,
                required = %required,
                "insufficient role"
            );
            return Err(StatusCode::UNAUTHORIZED);
        }
    }

    req.extensions_mut().insert(PrincipalContext::new(principal));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, StatusCode> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(token)
}
