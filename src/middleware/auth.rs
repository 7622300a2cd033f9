// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session extraction middleware.
//!
//! The frontend completes the Strava OAuth flow and supplies the access
//! token on every request, either in the session cookie or as a Bearer
//! header. No token state is kept server-side.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

/// Session cookie set by the frontend after OAuth completes.
pub const SESSION_COOKIE: &str = "paceboard_token";

/// Per-request session carrying the Strava access token.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
}

/// Middleware that requires a Strava access token on the request.
pub async fn require_session(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Try cookie first, then header
    let token = if let Some(cookie) = jar.get(SESSION_COOKIE) {
        cookie.value().to_string()
    } else {
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match auth_header {
            Some(h) if h.starts_with("Bearer ") => h[7..].to_string(),
            _ => return Err(StatusCode::UNAUTHORIZED),
        }
    };

    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    request
        .extensions_mut()
        .insert(Session {
            access_token: token,
        });

    Ok(next.run(request).await)
}
