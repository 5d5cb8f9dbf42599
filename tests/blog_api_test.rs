//! End-to-end tests for the HTTP surface.
//!
//! Each test drives the real router over a fresh in-process document
//! store, so the full handler -> service -> repository path is exercised.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use bloglist_api::api::create_router;
use bloglist_api::{AppState, Config, MemoryStore};

fn test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    create_router(AppState::from_config(store, Config::for_tests()))
}

fn json_request(method: &str, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a request and return (status, parsed JSON body or Null when empty)
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Register the default user and log in, returning a valid bearer token
async fn register_and_login(app: &Router) -> String {
    let payload = json!({"username": "root", "name": "Superuser", "password": "sekret"});
    let (status, _) = send(app, json_request("POST", "/users", &payload, None)).await;
    assert_eq!(status, StatusCode::CREATED);

    let payload = json!({"username": "root", "password": "sekret"});
    let (status, body) = send(app, json_request("POST", "/login", &payload, None)).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

/// Seed the two well-known blogs, returning their ids
async fn seed_blogs(app: &Router, token: &str) -> Vec<String> {
    let blogs = [
        json!({
            "title": "Go To Statement Considered Harmful",
            "author": "Edsger W. Dijkstra",
            "url": "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf",
            "likes": 5
        }),
        json!({
            "title": "Canonical string reduction",
            "author": "Edsger W. Dijkstra",
            "url": "https://example.com/csr",
            "likes": 12
        }),
    ];

    let mut ids = Vec::new();
    for blog in &blogs {
        let (status, body) = send(app, json_request("POST", "/blogs", blog, Some(token))).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["id"].as_str().unwrap().to_string());
    }
    ids
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|blog| blog["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn blogs_are_returned_as_json() {
    let app = test_app();
    let token = register_and_login(&app).await;
    seed_blogs(&app, &token).await;

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/blogs"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn all_seeded_blogs_are_returned() {
    let app = test_app();
    let token = register_and_login(&app).await;
    seed_blogs(&app, &token).await;

    let (status, body) = send(&app, bare_request("GET", "/blogs")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert!(titles(&body).contains(&"Go To Statement Considered Harmful".to_string()));
}

#[tokio::test]
async fn blogs_expose_id_and_never_an_internal_key() {
    let app = test_app();
    let token = register_and_login(&app).await;
    seed_blogs(&app, &token).await;

    let (_, body) = send(&app, bare_request("GET", "/blogs")).await;

    let first = &body.as_array().unwrap()[0];
    assert!(first.get("id").is_some());
    assert!(first.get("_id").is_none());
    // Owner is expanded without password material
    assert!(first["user"].get("username").is_some());
    assert!(first["user"].get("password_hash").is_none());
    assert!(first["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn a_valid_blog_can_be_added() {
    let app = test_app();
    let token = register_and_login(&app).await;
    seed_blogs(&app, &token).await;

    let new_blog = json!({
        "title": "Le blog de Cheikh3",
        "author": "Moi-même",
        "url": "https://mon-aaaa-blog.com",
        "likes": 4
    });
    let (status, body) = send(&app, json_request("POST", "/blogs", &new_blog, Some(&token))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Le blog de Cheikh3");
    assert_eq!(body["likes"], 4);

    let (_, body) = send(&app, bare_request("GET", "/blogs")).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert!(titles(&body).contains(&"Le blog de Cheikh3".to_string()));
}

#[tokio::test]
async fn missing_likes_defaults_to_zero() {
    let app = test_app();
    let token = register_and_login(&app).await;

    let new_blog = json!({
        "title": "Le blog de Cheikh4",
        "author": "Moi-même",
        "url": "https://mon-aaaa-blog.com"
    });
    let (status, body) = send(&app, json_request("POST", "/blogs", &new_blog, Some(&token))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["likes"], 0);
}

#[tokio::test]
async fn creating_a_blog_without_a_token_fails() {
    let app = test_app();
    let token = register_and_login(&app).await;
    seed_blogs(&app, &token).await;

    let new_blog = json!({
        "title": "Unauthorized",
        "author": "Nobody",
        "url": "https://example.com"
    });

    // No Authorization header
    let (status, body) = send(&app, json_request("POST", "/blogs", &new_blog, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    // Garbage token
    let (status, _) = send(&app, json_request("POST", "/blogs", &new_blog, Some("garbage"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // An invalid token never results in a partial write
    let (_, body) = send(&app, bare_request("GET", "/blogs")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn created_blog_is_appended_to_its_owner() {
    let app = test_app();
    let token = register_and_login(&app).await;
    seed_blogs(&app, &token).await;

    let (status, body) = send(&app, bare_request("GET", "/users")).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    let blogs = users[0]["blogs"].as_array().unwrap();
    assert_eq!(blogs.len(), 2);
    assert_eq!(blogs[0]["title"], "Go To Statement Considered Harmful");
    // Expanded blogs carry only the projection fields
    assert!(blogs[0].get("user").is_none());
    assert!(users[0].get("password_hash").is_none());
}

#[tokio::test]
async fn a_single_blog_can_be_fetched() {
    let app = test_app();
    let token = register_and_login(&app).await;
    let ids = seed_blogs(&app, &token).await;

    let (status, body) = send(&app, bare_request("GET", &format!("/blogs/{}", ids[0]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Go To Statement Considered Harmful");

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(&app, bare_request("GET", &format!("/blogs/{}", missing))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deletion_succeeds_with_204_and_removes_exactly_one_blog() {
    let app = test_app();
    let token = register_and_login(&app).await;
    let ids = seed_blogs(&app, &token).await;

    let (status, body) = send(&app, bare_request("DELETE", &format!("/blogs/{}", ids[0]))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, body) = send(&app, bare_request("GET", "/blogs")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert!(!titles(&body).contains(&"Go To Statement Considered Harmful".to_string()));
}

#[tokio::test]
async fn deleting_a_nonexistent_blog_still_reports_success() {
    let app = test_app();
    let token = register_and_login(&app).await;
    seed_blogs(&app, &token).await;

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(&app, bare_request("DELETE", &format!("/blogs/{}", missing))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, bare_request("GET", "/blogs")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn updating_likes_returns_the_updated_blog() {
    let app = test_app();
    let token = register_and_login(&app).await;
    let ids = seed_blogs(&app, &token).await;

    let payload = json!({"likes": 4});
    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/blogs/{}", ids[0]), &payload, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["likes"], 4);
}

#[tokio::test]
async fn updating_a_nonexistent_blog_fails_with_404() {
    let app = test_app();
    let token = register_and_login(&app).await;
    seed_blogs(&app, &token).await;

    let missing = uuid::Uuid::new_v4();
    let payload = json!({"likes": 4});
    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/blogs/{}", missing), &payload, None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn registration_rejects_a_two_character_password() {
    let app = test_app();

    let payload = json!({"username": "newuser", "name": "New User", "password": "ab"});
    let (status, body) = send(&app, json_request("POST", "/users", &payload, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn registration_accepts_a_three_character_password() {
    let app = test_app();

    let payload = json!({"username": "newuser", "name": "New User", "password": "abc"});
    let (status, body) = send(&app, json_request("POST", "/users", &payload, None)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "newuser");
    assert_eq!(body["blogs"].as_array().unwrap().len(), 0);
    // No password material in the response projection
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    // The stored credential verifies against the plaintext, not equals it
    let payload = json!({"username": "newuser", "password": "abc"});
    let (status, _) = send(&app, json_request("POST", "/login", &payload, None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn registration_rejects_a_duplicate_username() {
    let app = test_app();
    register_and_login(&app).await;

    let payload = json!({"username": "root", "name": "Impostor", "password": "sekret"});
    let (status, _) = send(&app, json_request("POST", "/users", &payload, None)).await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = test_app();
    register_and_login(&app).await;

    let payload = json!({"username": "root", "password": "wrong"});
    let (status, _) = send(&app, json_request("POST", "/login", &payload, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let payload = json!({"username": "nobody", "password": "sekret"});
    let (status, _) = send(&app, json_request("POST", "/login", &payload, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
