//! Role-scoped placeholder data endpoints.
//!
//! These exist to exercise the route gates; the guard has already verified
//! the caller's role by the time a handler runs.

pub async fn mieszkaniec() -> &'static str {
    "Data for mieszkaniec"
}

pub async fn zarzad() -> &'static str {
    "Data for zarząd"
}

pub async fn administrator() -> &'static str {
    "Data for administrator"
}

pub async fn user() -> &'static str {
    "Data for user"
}

pub async fn moderator() -> &'static str {
    "Data for moderator"
}
