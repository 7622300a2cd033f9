// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("No activity data available")]
    NoActivityData,

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Marker message for a Strava 429 response.
    pub const STRAVA_RATE_LIMIT: &'static str = "rate_limited";
    /// Marker message for a Strava 401 response.
    pub const STRAVA_TOKEN_ERROR: &'static str = "token_rejected";
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::NoActivityData => (
                StatusCode::NOT_FOUND,
                "no_activity_data",
                Some("No activities were returned for this athlete".to_string()),
            ),
            AppError::StravaApi(msg) if msg.as_str() == AppError::STRAVA_TOKEN_ERROR => {
                (StatusCode::UNAUTHORIZED, "invalid_token", None)
            }
            AppError::StravaApi(msg) if msg.as_str() == AppError::STRAVA_RATE_LIMIT => {
                (StatusCode::TOO_MANY_REQUESTS, "rate_limited", None)
            }
            AppError::StravaApi(msg) => {
                (StatusCode::BAD_GATEWAY, "strava_error", Some(msg.clone()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
