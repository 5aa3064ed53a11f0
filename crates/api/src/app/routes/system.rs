use std::sync::Arc;

use axum::{Extension, Json};

use crate::app::AppState;
use crate::app::dto::StatusResponse;

/// GET /_status — public deployment probe.
pub async fn status(Extension(state): Extension<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        code: 200,
        status: "OK",
        commit: state.commit.clone(),
    })
}
