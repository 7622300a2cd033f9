// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API surface tests: health, session requirements and input validation.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

// Parameter validation happens before any Strava call, so these tests
// never need a live mock behind the base URL.
const UNUSED_BASE: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _state) = common::create_test_app(UNUSED_BASE);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_stats_requires_session() {
    let (app, _state) = common::create_test_app(UNUSED_BASE);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_accepted_from_cookie() {
    let (app, _state) = common::create_test_app(UNUSED_BASE);

    // Invalid sport proves the request got past the session check
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/stats?sport=juggling")
                .header(header::COOKIE, "paceboard_token=test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_sport_rejected() {
    let (app, _state) = common::create_test_app(UNUSED_BASE);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/stats?sport=rowing")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_invalid_chart_period_rejected() {
    let (app, _state) = common::create_test_app(UNUSED_BASE);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/chart?sport=running&period=fortnight")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_bearer_token_rejected() {
    let (app, _state) = common::create_test_app(UNUSED_BASE);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/athlete")
                .header(header::AUTHORIZATION, "Bearer ")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
