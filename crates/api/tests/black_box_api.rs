use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use osiedle_api::config::AppConfig;
use osiedle_api::variant::Variant;

const SECRET: &str = "black-box-test-secret";
const TTL_MS: i64 = 600_000;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(variant: Variant) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let config = AppConfig {
            bind_addr: String::new(),
            jwt_secret: SECRET.to_string(),
            jwt_ttl_ms: TTL_MS,
            commit: "abc1234".to_string(),
            variant,
        };
        let app = osiedle_api::app::build_app(&config).expect("failed to build app");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawClaims {
    sub: String,
    roles: Vec<String>,
    iat: i64,
    exp: i64,
}

async fn login(srv: &TestServer, username: &str, password: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .unwrap()
}

async fn login_token(srv: &TestServer, username: &str, password: &str) -> String {
    let res = login(srv, username, password).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["type"], "Bearer");
    body["token"].as_str().unwrap().to_string()
}

async fn get_with_token(srv: &TestServer, path: &str, token: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(format!("{}{}", srv.base_url, path))
        .bearer_auth(token)
        .send()
        .await
        .unwrap()
}

/// Mint a token outside the server, the way an attacker or an expired
/// session would present one.
fn mint(sub: &str, roles: &[&str], iat: i64, exp: i64) -> String {
    let claims = RawClaims {
        sub: sub.to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        iat,
        exp,
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("failed to encode jwt")
}

#[tokio::test]
async fn status_is_public_and_reports_commit() {
    let srv = TestServer::spawn(Variant::Osiedle).await;

    let res = reqwest::Client::new()
        .get(format!("{}/_status", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["code"], 200);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["commit"], "abc1234");
}

#[tokio::test]
async fn login_issues_token_with_exact_role_claim() {
    let srv = TestServer::spawn(Variant::Demo).await;
    let token = login_token(&srv, "user", "user123").await;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    let data = jsonwebtoken::decode::<RawClaims>(
        &token,
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &validation,
    )
    .unwrap();

    assert_eq!(data.claims.sub, "user");
    assert_eq!(data.claims.roles, vec!["USER"]);
    assert_eq!((data.claims.exp - data.claims.iat) * 1000, TTL_MS);
}

#[tokio::test]
async fn bad_credentials_are_a_uniform_empty_401() {
    let srv = TestServer::spawn(Variant::Demo).await;

    let wrong_password = login(&srv, "user", "wrong").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert!(wrong_password.text().await.unwrap().is_empty());

    let unknown_user = login(&srv, "nobody", "user123").await;
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert!(unknown_user.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let srv = TestServer::spawn(Variant::Demo).await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/user", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/user", srv.base_url))
        .header("Authorization", "Basic dXNlcjp1c2VyMTIz")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn base_role_is_rejected_on_higher_gates() {
    let srv = TestServer::spawn(Variant::Demo).await;
    let token = login_token(&srv, "user", "user123").await;

    let res = get_with_token(&srv, "/user", &token).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Data for user");

    for path in ["/moderator", "/administrator"] {
        let res = get_with_token(&srv, path, &token).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "path: {path}");
        assert!(res.text().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn administrator_passes_every_gate() {
    let srv = TestServer::spawn(Variant::Demo).await;
    let token = login_token(&srv, "administrator", "admin123").await;

    for path in ["/user", "/moderator", "/administrator"] {
        let res = get_with_token(&srv, path, &token).await;
        assert_eq!(res.status(), StatusCode::OK, "path: {path}");
    }
}

#[tokio::test]
async fn zarzad_implies_mieszkaniec_but_not_administrator() {
    let srv = TestServer::spawn(Variant::Osiedle).await;
    let token = login_token(&srv, "zarzad", "zarzad123").await;

    assert_eq!(get_with_token(&srv, "/mieszkaniec", &token).await.status(), StatusCode::OK);
    assert_eq!(get_with_token(&srv, "/zarzad", &token).await.status(), StatusCode::OK);
    assert_eq!(
        get_with_token(&srv, "/administrator", &token).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn expired_token_is_rejected_regardless_of_roles() {
    let srv = TestServer::spawn(Variant::Demo).await;

    let now = Utc::now().timestamp();
    let token = mint(
        "administrator",
        &["USER", "MODERATOR", "ADMINISTRATOR"],
        now - 7200,
        now - 3600,
    );

    for path in ["/user", "/moderator", "/administrator"] {
        let res = get_with_token(&srv, path, &token).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "path: {path}");
    }
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    let srv = TestServer::spawn(Variant::Demo).await;
    let token = login_token(&srv, "administrator", "admin123").await;

    let dot = token.rfind('.').unwrap();
    let first_sig_byte = token.as_bytes()[dot + 1];
    let flipped = if first_sig_byte == b'A' { "B" } else { "A" };
    let tampered = format!("{}{}{}", &token[..dot + 1], flipped, &token[dot + 2..]);

    let res = get_with_token(&srv, "/user", &tampered).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_with_unknown_roles_authenticates_but_passes_no_gate() {
    let srv = TestServer::spawn(Variant::Demo).await;

    let now = Utc::now().timestamp();
    let token = mint("stranger", &["SUPERUSER"], now, now + 600);

    // Unmatched paths only require authentication, so the request reaches
    // routing (404); role-gated paths still reject it.
    let res = get_with_token(&srv, "/whatever", &token).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = get_with_token(&srv, "/user", &token).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn decision_log_is_paginated_and_gated() {
    let srv = TestServer::spawn(Variant::Osiedle).await;

    let res = reqwest::Client::new()
        .get(format!("{}/mieszkaniec/decision-log", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let token = login_token(&srv, "mieszkaniec", "mieszkaniec123").await;
    let res = get_with_token(&srv, "/mieszkaniec/decision-log?page=0&size=2&sort=date", &token).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["totalElements"], 5);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["first"], true);
    assert_eq!(body["last"], false);
    assert_eq!(body["content"].as_array().unwrap().len(), 2);
    assert!(body["content"][0]["votes"]["votesFor"].is_number());

    let res = get_with_token(
        &srv,
        "/mieszkaniec/decision-log?category=Finanse&status=active",
        &token,
    )
    .await;
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["totalElements"], 1);
    assert_eq!(body["content"][0]["category"], "Finanse");
}
