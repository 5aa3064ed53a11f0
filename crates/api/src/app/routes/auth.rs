//! Login: password check against the credential store, then token issuance.

use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use crate::app::dto::{LoginRequest, LoginResponse};
use crate::app::{AppState, errors};

/// POST /login
///
/// Unknown username and wrong password produce the same empty 401, so the
/// endpoint cannot be used to enumerate users.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> axum::response::Response {
    let Some(credential) = state.credentials.find_by_username(&request.username) else {
        return errors::unauthorized();
    };

    if !credential.verify_password(&request.password) {
        return errors::unauthorized();
    }

    match state.tokens.issue(&credential.username, &credential.roles, Utc::now()) {
        Ok(token) => {
            tracing::info!(username = %credential.username, "login succeeded");
            (StatusCode::OK, Json(LoginResponse::bearer(token))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "token issuance failed");
            errors::internal_error()
        }
    }
}
