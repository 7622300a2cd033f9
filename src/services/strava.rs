// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client and the activity-window fetch service.
//!
//! Handles:
//! - Athlete profile fetching
//! - Trailing activity-window fetching
//! - Rate limit and rejected-token detection
//! - Short-lived per-token window caching

use crate::error::AppError;
use crate::models::{Activity, AthleteProfile};
use crate::time_utils;
use serde::Deserialize;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
}

impl StravaClient {
    /// Create a new client against the given API base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Get the authenticated athlete's profile.
    pub async fn get_athlete(&self, access_token: &str) -> Result<StravaAthlete, AppError> {
        let url = format!("{}/athlete", self.base_url);
        self.get_json(&url, access_token).await
    }

    /// List the athlete's most recent activities (paginated, newest first).
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: Option<i64>, // Unix timestamp
        page: u32,
        per_page: u32,
    ) -> Result<Vec<StravaActivitySummary>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let mut query = vec![
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
                return Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()));
            }

            // Unauthorized - token expired or revoked
            if status.as_u16() == 401 {
                return Err(AppError::StravaApi(
                    AppError::STRAVA_TOKEN_ERROR.to_string(),
                ));
            }

            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }
}

/// Summary activity from the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaActivitySummary {
    pub id: u64,
    pub sport_type: String,
    pub start_date_local: String,
    pub distance: f64,
    pub moving_time: u64,
    #[serde(default)]
    pub total_elevation_gain: f64,
}

impl StravaActivitySummary {
    /// Normalize into the engine's activity record.
    ///
    /// Returns `None` when the local start timestamp cannot be parsed; the
    /// caller drops such rows so the engine only sees well-formed data.
    pub fn into_activity(self) -> Option<Activity> {
        let start_date_local = time_utils::parse_start_date_local(&self.start_date_local)?;
        Some(Activity {
            id: self.id,
            sport_type: self.sport_type,
            start_date_local,
            distance_meters: self.distance,
            moving_time_seconds: self.moving_time,
            elevation_gain_meters: self.total_elevation_gain,
        })
    }
}

/// Athlete fields consumed from the `/athlete` endpoint. Everything except
/// the ID is optional in practice.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaAthlete {
    pub id: u64,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub bio: Option<String>,
    pub profile_medium: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl From<StravaAthlete> for AthleteProfile {
    /// Apply the dashboard's display fallbacks. Empty strings count as
    /// missing, matching how the profile card treats them.
    fn from(athlete: StravaAthlete) -> Self {
        let firstname = athlete.firstname.unwrap_or_default();
        Self {
            id: athlete.id,
            username: non_empty(athlete.username).unwrap_or_else(|| firstname.clone()),
            lastname: athlete.lastname.unwrap_or_default(),
            bio: non_empty(athlete.bio).unwrap_or_else(|| "Strava Athlete".to_string()),
            profile_medium: athlete.profile_medium,
            city: non_empty(athlete.city).unwrap_or_else(|| "Unknown".to_string()),
            country: non_empty(athlete.country).unwrap_or_else(|| "Unknown".to_string()),
            firstname,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ─────────────────────────────────────────────────────────────────────────────
// StravaService - window fetching with short-lived caching
// ─────────────────────────────────────────────────────────────────────────────

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;

/// How long a fetched activity window may be served from memory.
const WINDOW_CACHE_TTL_SECS: i64 = 60;

/// Strava caps `per_page` at 200.
const MAX_PER_PAGE: u32 = 200;

/// A fetched trailing activity window.
#[derive(Debug, Clone)]
pub struct ActivityWindow {
    /// Normalized activities, newest first as Strava returns them.
    pub activities: Vec<Activity>,
    /// Rows Strava returned, before normalization dropped any.
    pub fetched: u32,
    /// Page size that was requested.
    pub requested: u32,
}

impl ActivityWindow {
    /// Whether this window provably contains the athlete's whole history.
    /// Strava returning fewer rows than requested means there is nothing
    /// further back to fetch.
    pub fn history_complete(&self) -> bool {
        self.fetched < self.requested
    }
}

/// Cached window with its fetch time.
#[derive(Clone)]
struct CachedWindow {
    window: ActivityWindow,
    fetched_at: DateTime<Utc>,
}

/// High-level fetch service the dashboard endpoints go through.
///
/// Keeps a short-TTL in-memory cache keyed by access token, so quick
/// sport and period switches in the UI reuse one Strava call instead of
/// repeating identical fetches. Tokens never touch disk.
#[derive(Clone)]
pub struct StravaService {
    client: StravaClient,
    window_cache: Arc<DashMap<String, CachedWindow>>,
    page_size: u32,
}

impl StravaService {
    /// Create a new service against the given API base URL.
    pub fn new(base_url: String, page_size: u32) -> Self {
        Self {
            client: StravaClient::new(base_url),
            window_cache: Arc::new(DashMap::new()),
            page_size: page_size.min(MAX_PER_PAGE),
        }
    }

    /// Fetch the athlete's trailing activity window.
    ///
    /// Serves from the per-token cache while the last fetch is younger
    /// than the TTL. Rows with unparseable timestamps are dropped here so
    /// the engine never sees them.
    pub async fn recent_activities(&self, access_token: &str) -> Result<ActivityWindow, AppError> {
        let now = Utc::now();

        if let Some(cached) = self.window_cache.get(access_token) {
            if now - cached.fetched_at < Duration::seconds(WINDOW_CACHE_TTL_SECS) {
                return Ok(cached.window.clone());
            }
            // Stale entry - fall through to refetch
        }

        let summaries = self
            .client
            .list_activities(access_token, None, 1, self.page_size)
            .await?;

        let fetched = summaries.len() as u32;
        let activities: Vec<Activity> = summaries
            .into_iter()
            .filter_map(|summary| {
                let id = summary.id;
                let activity = summary.into_activity();
                if activity.is_none() {
                    tracing::debug!(activity_id = id, "Dropping activity with bad start time");
                }
                activity
            })
            .collect();

        tracing::debug!(
            fetched,
            kept = activities.len(),
            requested = self.page_size,
            "Fetched Strava activity window"
        );

        let window = ActivityWindow {
            activities,
            fetched,
            requested: self.page_size,
        };

        self.window_cache.insert(
            access_token.to_string(),
            CachedWindow {
                window: window.clone(),
                fetched_at: now,
            },
        );

        Ok(window)
    }

    /// Fetch the athlete profile with display fallbacks applied.
    pub async fn athlete_profile(&self, access_token: &str) -> Result<AthleteProfile, AppError> {
        let athlete = self.client.get_athlete(access_token).await?;
        Ok(AthleteProfile::from(athlete))
    }
}
