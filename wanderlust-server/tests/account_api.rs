//! Account, profile, catalog and seed flows exercised over the real router.
//! Run: cargo test -p wanderlust-server --test account_api

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use wanderlust_server::db::DbService;
use wanderlust_server::{Config, ServerState, build_app};

async fn test_app() -> Router {
    let db = DbService::open_in_memory().await.unwrap().db;
    let config = Config::with_overrides("/tmp/wanderlust-test", 0);
    let state = ServerState::new(config, db);
    state.ensure_admin_account().await.unwrap();
    build_app(&state.config).with_state(state)
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn register(app: &Router, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
    request(
        app,
        "POST",
        "/api/register",
        Some(json!({
            "name": name,
            "email": email,
            "password": password,
            "hometown": "Lisbon",
            "dob": "1990-04-12",
        })),
    )
    .await
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    request(
        app,
        "POST",
        "/api/login",
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

#[tokio::test]
async fn register_then_login_roundtrip() {
    let app = test_app().await;

    let (status, body) = register(&app, "Ana", "ana@example.com", "hunter2").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered");

    let (status, body) = login(&app, "ana@example.com", "hunter2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["role"], "user");
    assert!(body["id"].as_str().unwrap().starts_with("user:"));
}

#[tokio::test]
async fn login_failures_share_one_error_message() {
    let app = test_app().await;
    register(&app, "Ana", "ana@example.com", "hunter2").await;

    let (status, wrong_pass) = login(&app, "ana@example.com", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown) = login(&app, "nobody@example.com", "whatever").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Identical bodies: the response must not reveal which part was wrong
    assert_eq!(wrong_pass, unknown);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = test_app().await;

    let (status, _) = register(&app, "Ana", "ana@example.com", "hunter2").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&app, "Other Ana", "ana@example.com", "different").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn admin_account_is_provisioned_through_normal_login() {
    let app = test_app().await;

    // No hardcoded bypass: the provisioned account authenticates against
    // its stored argon2 hash like any other user
    let (status, body) = login(&app, "admin@wanderlust.com", "admin123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");
    assert_eq!(body["name"], "Super Admin");
}

#[tokio::test]
async fn register_rejects_blank_name_and_bad_email() {
    let app = test_app().await;

    let (status, _) = register(&app, "  ", "ana@example.com", "hunter2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = register(&app, "Ana", "not-an-email", "hunter2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_roundtrip_never_exposes_password() {
    let app = test_app().await;
    register(&app, "Ana", "ana@example.com", "hunter2").await;
    let (_, session) = login(&app, "ana@example.com", "hunter2").await;
    let id = session["id"].as_str().unwrap().to_string();

    let uri = format!("/api/users/{id}");
    let (status, profile) = request(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["email"], "ana@example.com");
    assert_eq!(profile["hometown"], "Lisbon");
    assert!(profile.get("password").is_none());

    let (status, updated) = request(
        &app,
        "PUT",
        &uri,
        Some(json!({ "name": "Ana Silva", "hometown": "Porto" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Ana Silva");
    assert_eq!(updated["hometown"], "Porto");
    // Untouched fields survive the merge
    assert_eq!(updated["email"], "ana@example.com");
    assert_eq!(updated["dob"], "1990-04-12");
    assert!(updated.get("password").is_none());

    // Editing the profile must not break the password
    let (status, _) = login(&app, "ana@example.com", "hunter2").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_profile_is_a_404() {
    let app = test_app().await;
    let (status, _) = request(&app, "GET", "/api/users/user:doesnotexist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn tour_crud_roundtrip() {
    let app = test_app().await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/tours",
        Some(json!({
            "title": "Azores Whale Watching",
            "location": "Portugal",
            "price": 900,
            "duration": 4,
            "priority": "Standard",
            "shortDesc": "Atlantic giants.",
            "fullDesc": "Sperm whales off Sao Miguel...",
            "image": "https://example.com/azores.jpg",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, listed) = request(&app, "GET", "/api/tours", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let uri = format!("/api/tours/{id}");
    let (status, fetched) = request(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Azores Whale Watching");
    assert_eq!(fetched["duration"], 4);

    let (status, body) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deleted");

    let (status, _) = request(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seed_replaces_the_whole_catalog() {
    let app = test_app().await;

    // A pre-existing tour must not survive the seed
    let (status, _) = request(
        &app,
        "POST",
        "/api/tours",
        Some(json!({
            "title": "Doomed Tour",
            "location": "Nowhere",
            "price": 1,
            "duration": 1,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(&app, "GET", "/api/seed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Seeded 30 Packages Successfully");

    let (_, listed) = request(&app, "GET", "/api/tours", None).await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles.len(), 30);
    assert!(titles.contains(&"Kyoto Cherry Blossoms"));
    assert!(!titles.contains(&"Doomed Tour"));
}

#[tokio::test]
async fn health_reports_database_status() {
    let app = test_app().await;
    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
