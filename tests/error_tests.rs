// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error-to-response mapping tests.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use paceboard::error::AppError;

async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_unauthorized_maps_to_401() {
    let (status, body) = response_parts(AppError::Unauthorized).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_bad_request_carries_details() {
    let (status, body) =
        response_parts(AppError::BadRequest("Unknown sport 'rowing'".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["details"], "Unknown sport 'rowing'");
}

#[tokio::test]
async fn test_no_activity_data_maps_to_404() {
    let (status, body) = response_parts(AppError::NoActivityData).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no_activity_data");
}

#[tokio::test]
async fn test_rejected_token_marker_maps_to_401() {
    let err = AppError::StravaApi(AppError::STRAVA_TOKEN_ERROR.to_string());
    let (status, body) = response_parts(err).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");
}

#[tokio::test]
async fn test_rate_limit_marker_maps_to_429() {
    let err = AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string());
    let (status, body) = response_parts(err).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "rate_limited");
}

#[tokio::test]
async fn test_other_strava_failures_map_to_502() {
    let err = AppError::StravaApi("HTTP 500 Internal Server Error: boom".to_string());
    let (status, body) = response_parts(err).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "strava_error");
    assert_eq!(body["details"], "HTTP 500 Internal Server Error: boom");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let err = AppError::Internal(anyhow::anyhow!("connection pool exhausted"));
    let (status, body) = response_parts(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());
}
