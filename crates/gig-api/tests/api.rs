//! Router integration tests.
//!
//! These exercise the paths that complete without a live document store:
//! liveness, session issuance/clearing and the access guard. The store
//! client connects lazily, so building `AppState` needs no running store.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use gig_api::auth::SessionService;
use gig_api::{create_router, ApiConfig, AppState};
use gig_store::StoreClient;

async fn test_app() -> (Router, ApiConfig) {
    let config = ApiConfig::default();
    let store = StoreClient::connect("mongodb://localhost:27017", "gigdesk-test")
        .await
        .expect("client construction is lazy");
    let app = create_router(AppState::with_store(config.clone(), store));
    (app, config)
}

fn token_for(config: &ApiConfig, email: &str) -> String {
    SessionService::from_config(config)
        .issue(email)
        .expect("token issuance")
}

#[tokio::test]
async fn liveness_text_response() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"GigDesk server is running");
}

#[tokio::test]
async fn health_endpoint() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "healthy");
}

#[tokio::test]
async fn issue_token_sets_session_cookie() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email": "alice@x.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie set");
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn issue_token_rejects_invalid_email() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email": "not-an-email"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_expires_session_cookie() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("clearing cookie set");
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn bid_requests_require_session_cookie() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/bid-requests/alice@x.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bid_requests_reject_foreign_identity() {
    let (app, config) = test_app().await;
    let token = token_for(&config, "alice@x.com");

    // Valid credential, wrong mailbox: must 401 before any data access.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/bid-requests/bob@x.com")
                .header(header::COOKIE, format!("token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bid_requests_reject_tampered_token() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/bid-requests/alice@x.com")
                .header(header::COOKIE, "token=not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn security_headers_are_applied() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("X-Content-Type-Options").unwrap(),
        "nosniff"
    );
    assert!(response.headers().contains_key("X-Request-ID"));
}
