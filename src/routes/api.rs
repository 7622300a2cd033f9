// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated dashboard queries.

use crate::error::{AppError, Result};
use crate::middleware::auth::Session;
use crate::models::AthleteProfile;
use crate::stats::{Granularity, HeatmapDay, Sport, StatsSnapshot, Story, TimeBucket};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::sync::Arc;

/// API routes (require a session token).
/// The session middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/athlete", get(get_athlete))
        .route("/api/stats", get(get_stats))
        .route("/api/chart", get(get_chart))
        .route("/api/heatmap", get(get_heatmap))
        .route("/api/story", get(get_story))
}

// ─── Query Parameters ────────────────────────────────────────

#[derive(Deserialize)]
struct SportQuery {
    /// Dashboard sport category; defaults to running
    sport: Option<String>,
}

#[derive(Deserialize)]
struct ChartQuery {
    sport: Option<String>,
    /// Bucket granularity: "week" or "month"
    #[serde(default = "default_period")]
    period: String,
}

fn default_period() -> String {
    "week".to_string()
}

fn parse_sport(raw: Option<&str>) -> Result<Sport> {
    match raw {
        None => Ok(Sport::Running),
        Some(raw) => Sport::parse(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown sport '{}'", raw))),
    }
}

fn parse_period(raw: &str) -> Result<Granularity> {
    Granularity::parse(raw)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown period '{}'", raw)))
}

/// Local wall-clock anchor for all trailing windows.
fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

// ─── Handlers ────────────────────────────────────────────────

/// Get the athlete profile for the dashboard header.
async fn get_athlete(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Json<AthleteProfile>> {
    let profile = state.dashboard.profile(&session).await?;
    Ok(Json(profile))
}

/// Get the full stats snapshot for one sport.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(params): Query<SportQuery>,
) -> Result<Json<StatsSnapshot>> {
    let sport = parse_sport(params.sport.as_deref())?;
    tracing::debug!(sport = %sport, "Handling stats query");

    let snapshot = state.dashboard.stats(&session, sport, local_now()).await?;
    Ok(Json(snapshot))
}

/// Get the 12 trailing chart buckets for one sport and period.
async fn get_chart(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(params): Query<ChartQuery>,
) -> Result<Json<Vec<TimeBucket>>> {
    let sport = parse_sport(params.sport.as_deref())?;
    let granularity = parse_period(&params.period)?;
    tracing::debug!(sport = %sport, period = %granularity, "Handling chart query");

    let buckets = state
        .dashboard
        .chart(&session, sport, granularity, local_now())
        .await?;
    Ok(Json(buckets))
}

/// Get the trailing-year heatmap for one sport.
async fn get_heatmap(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(params): Query<SportQuery>,
) -> Result<Json<Vec<HeatmapDay>>> {
    let sport = parse_sport(params.sport.as_deref())?;
    tracing::debug!(sport = %sport, "Handling heatmap query");

    let days = state.dashboard.heatmap(&session, sport, local_now()).await?;
    Ok(Json(days))
}

/// Get the current-week story for one sport.
async fn get_story(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(params): Query<SportQuery>,
) -> Result<Json<Story>> {
    let sport = parse_sport(params.sport.as_deref())?;
    tracing::debug!(sport = %sport, "Handling story query");

    let story = state.dashboard.story(&session, sport, local_now()).await?;
    Ok(Json(story))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sport_defaults_to_running() {
        assert_eq!(parse_sport(None).unwrap(), Sport::Running);
        assert_eq!(parse_sport(Some("cycling")).unwrap(), Sport::Cycling);
    }

    #[test]
    fn test_parse_sport_rejects_unknown() {
        let err = parse_sport(Some("curling")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(parse_period("week").unwrap(), Granularity::Week);
        assert_eq!(parse_period("month").unwrap(), Granularity::Month);
        assert!(matches!(
            parse_period("fortnight").unwrap_err(),
            AppError::BadRequest(_)
        ));
    }
}
