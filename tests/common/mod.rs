// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDateTime;
use paceboard::config::Config;
use paceboard::models::Activity;
use paceboard::routes::create_router;
use paceboard::services::{DashboardService, StravaService};
use paceboard::AppState;
use std::sync::Arc;

/// Create test state pointed at the given Strava API base URL.
#[allow(dead_code)]
pub fn test_state(strava_api_base: &str) -> Arc<AppState> {
    let config = Config {
        strava_api_base: strava_api_base.to_string(),
        ..Config::default()
    };

    let strava = StravaService::new(config.strava_api_base.clone(), config.activity_page_size);

    Arc::new(AppState {
        config,
        dashboard: DashboardService::new(strava),
    })
}

/// Create a test app against the given Strava API base URL.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(strava_api_base: &str) -> (axum::Router, Arc<AppState>) {
    let state = test_state(strava_api_base);
    (create_router(state.clone()), state)
}

/// One Strava list-endpoint row as the API would return it.
#[allow(dead_code)]
pub fn strava_activity_json(
    id: u64,
    sport_type: &str,
    start_date_local: &str,
    distance: f64,
    moving_time: u64,
    elevation: f64,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "sport_type": sport_type,
        "start_date_local": start_date_local,
        "distance": distance,
        "moving_time": moving_time,
        "total_elevation_gain": elevation,
    })
}

/// Normalized activity fixture for driving the engine directly.
#[allow(dead_code)]
pub fn make_activity(
    id: u64,
    sport_type: &str,
    start: NaiveDateTime,
    distance: f64,
    moving_time: u64,
    elevation: f64,
) -> Activity {
    Activity {
        id,
        sport_type: sport_type.to_string(),
        start_date_local: start,
        distance_meters: distance,
        moving_time_seconds: moving_time,
        elevation_gain_meters: elevation,
    }
}
