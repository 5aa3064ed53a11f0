use axum::{
    Router,
    routing::{get, post},
};

use crate::variant::Variant;

pub mod auth;
pub mod data;
pub mod decisions;
pub mod system;

/// Full routing tree for the selected variant.
///
/// Role gating happens in the guard middleware against the variant's route
/// table, not here; this is only handler wiring.
pub fn router(variant: Variant) -> Router {
    let base = Router::new()
        .route("/login", post(auth::login))
        .route("/_status", get(system::status));

    match variant {
        Variant::Osiedle => base
            .route("/mieszkaniec", get(data::mieszkaniec))
            .route("/mieszkaniec/decision-log", get(decisions::decision_log))
            .route("/zarzad", get(data::zarzad))
            .route("/administrator", get(data::administrator)),
        Variant::Demo => base
            .route("/user", get(data::user))
            .route("/moderator", get(data::moderator))
            .route("/administrator", get(data::administrator)),
    }
}
