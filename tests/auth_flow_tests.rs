// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth flow tests: login redirect and callback token exchange.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tower::ServiceExt;

mod common;

/// Stub token endpoint: accepts code "abc" with the expected grant type.
fn token_endpoint() -> Router {
    Router::new().route(
        "/oauth/token",
        post(|Json(body): Json<serde_json::Value>| async move {
            if body["code"] == "abc" && body["grant_type"] == "authorization_code" {
                Json(serde_json::json!({ "access_token": "tok123" })).into_response()
            } else {
                (StatusCode::BAD_REQUEST, "unexpected exchange request").into_response()
            }
        }),
    )
}

/// Stub token endpoint that always rejects the grant.
fn failing_token_endpoint() -> Router {
    Router::new().route(
        "/oauth/token",
        post(|| async { (StatusCode::BAD_REQUEST, "invalid_grant") }),
    )
}

#[tokio::test]
async fn test_login_redirects_to_strava_authorization() {
    let app = common::create_offline_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/auth/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect should carry a Location header");

    assert!(location.starts_with("https://www.strava.com/oauth/authorize?"));
    assert!(location.contains("client_id=test_client_id"));
    assert!(location.contains("response_type=code"));
    assert!(location.contains("scope=activity:read_all"));
    assert!(location.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fauth%2Fcallback"));
}

#[tokio::test]
async fn test_callback_sets_cookie_and_redirects_home() {
    let upstream = common::spawn_upstream(token_endpoint()).await;
    let app = common::create_test_app(&upstream);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/auth/callback?code=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("callback should set the token cookie");

    assert!(cookie.starts_with("strava_token=tok123"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_callback_provider_rejection_sets_no_cookie() {
    let upstream = common::spawn_upstream(failing_token_endpoint()).await;
    let app = common::create_test_app(&upstream);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/auth/callback?code=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "upstream_auth_error");
    // The provider's body is carried through unchanged.
    assert_eq!(body["details"], "invalid_grant");
}

#[tokio::test]
async fn test_callback_without_code_is_rejected() {
    let app = common::create_offline_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/auth/callback")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
