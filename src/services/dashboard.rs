// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request-scoped orchestration: fetch a window, run the engine.

use crate::error::{AppError, Result};
use crate::middleware::auth::Session;
use crate::models::{Activity, AthleteProfile};
use crate::services::strava::{ActivityWindow, StravaService};
use crate::stats::bests::PeriodBests;
use crate::stats::totals::AggregateTotals;
use crate::stats::{buckets, heatmap, narrative, snapshot};
use crate::stats::{Granularity, HeatmapDay, Sport, StatsSnapshot, Story, TimeBucket};
use chrono::{NaiveDateTime, NaiveTime};

/// Dashboard facade over the Strava fetch service and the stats engine.
///
/// Every method is one query: fetch the trailing window (or reuse the
/// cached one), filter by sport, derive the requested facet. Nothing is
/// retained between queries beyond the fetch service's own cache.
#[derive(Clone)]
pub struct DashboardService {
    strava: StravaService,
}

impl DashboardService {
    pub fn new(strava: StravaService) -> Self {
        Self { strava }
    }

    /// Full stats snapshot for one sport.
    pub async fn stats(
        &self,
        session: &Session,
        sport: Sport,
        now: NaiveDateTime,
    ) -> Result<StatsSnapshot> {
        let window = self.fetch_window(session).await?;
        tracing::debug!(sport = %sport, count = window.activities.len(), "Building stats snapshot");
        snapshot::build_snapshot(&window.activities, sport, now, window.history_complete())
    }

    /// Twelve trailing chart buckets for one sport and granularity.
    pub async fn chart(
        &self,
        session: &Session,
        sport: Sport,
        granularity: Granularity,
        now: NaiveDateTime,
    ) -> Result<Vec<TimeBucket>> {
        let window = self.fetch_window(session).await?;
        let filtered = sport.filter(&window.activities);
        tracing::debug!(sport = %sport, granularity = %granularity, count = filtered.len(), "Building chart");
        Ok(buckets::chart_buckets(&filtered, granularity, now))
    }

    /// Trailing-year heatmap for one sport.
    pub async fn heatmap(
        &self,
        session: &Session,
        sport: Sport,
        now: NaiveDateTime,
    ) -> Result<Vec<HeatmapDay>> {
        let window = self.fetch_window(session).await?;
        let filtered = sport.filter(&window.activities);
        Ok(heatmap::build_heatmap(&filtered, sport, now.date()))
    }

    /// Current-week story for one sport.
    pub async fn story(
        &self,
        session: &Session,
        sport: Sport,
        now: NaiveDateTime,
    ) -> Result<Story> {
        let window = self.fetch_window(session).await?;
        let filtered = sport.filter(&window.activities);

        let week_start = buckets::week_start(now.date()).and_time(NaiveTime::MIN);
        let week: Vec<&Activity> = filtered
            .into_iter()
            .filter(|a| a.start_date_local >= week_start && a.start_date_local <= now)
            .collect();

        let totals = AggregateTotals::from_activities(week.iter().copied());
        let bests = PeriodBests::from_activities(&week, sport.best_effort_targets());

        Ok(narrative::compose("this week", sport, &totals, &bests))
    }

    /// Athlete profile for the dashboard header.
    pub async fn profile(&self, session: &Session) -> Result<AthleteProfile> {
        self.strava.athlete_profile(&session.access_token).await
    }

    /// Fetch the trailing window, rejecting an empty result. An athlete
    /// with no activities at all gets an explicit error, not zeroed-out
    /// dashboards.
    async fn fetch_window(&self, session: &Session) -> Result<ActivityWindow> {
        let window = self.strava.recent_activities(&session.access_token).await?;
        if window.activities.is_empty() {
            return Err(AppError::NoActivityData);
        }
        Ok(window)
    }
}
