use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Uniform denial: empty 401 for every authentication/authorization failure.
///
/// Bad credentials, bad tokens, and insufficient roles must stay
/// indistinguishable on the wire.
pub fn unauthorized() -> axum::response::Response {
    StatusCode::UNAUTHORIZED.into_response()
}

pub fn internal_error() -> axum::response::Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
