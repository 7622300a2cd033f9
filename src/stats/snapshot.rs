// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Full dashboard snapshot assembly.

use crate::error::{AppError, Result};
use crate::models::Activity;
use crate::stats::bests::PeriodBests;
use crate::stats::buckets;
use crate::stats::sport::{Sport, CALORIES_PER_KM};
use crate::stats::totals::AggregateTotals;
use crate::stats::trend::{self, GrowthRates, TrendDeltas};
use crate::stats::{format_count, round1};
use crate::time_utils::{format_clock, format_hours_minutes, format_pace};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Placeholder shown for a best-effort target no activity has covered.
pub const NO_DATA: &str = "–";

/// Best-effort rows shown per highlight list.
const EFFORT_HIGHLIGHT_ROWS: usize = 4;

/// Formatted totals for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PeriodSummary {
    pub activities: u32,
    pub distance_km: f64,
    /// Human-readable moving time ("3h 25m")
    pub time: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub moving_time_seconds: u64,
    pub elevation_meters: f64,
    /// Estimated steps, present for walking only
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional, type = "number"))]
    pub steps: Option<u64>,
}

impl PeriodSummary {
    fn from_totals(totals: &AggregateTotals, sport: Sport) -> Self {
        Self {
            activities: totals.activities,
            distance_km: round1(totals.distance_meters / 1000.0),
            time: format_hours_minutes(totals.moving_time_seconds),
            moving_time_seconds: totals.moving_time_seconds,
            elevation_meters: round1(totals.elevation_gain_meters),
            steps: sport.estimated_steps(totals.distance_meters),
        }
    }
}

/// One row in a recent-period highlight list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Highlight {
    pub label: String,
    pub value: String,
    pub icon: String,
}

/// Lifetime totals plus the YTD share-of-lifetime growth rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AllTimeStats {
    #[serde(flatten)]
    pub totals: PeriodSummary,
    pub growth: GrowthRates,
}

/// Year-to-date block. Trends are absent as a whole when the fetched
/// history cannot support the prior-year comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct YtdStats {
    #[serde(flatten)]
    pub totals: PeriodSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub trends: Option<TrendDeltas>,
}

/// A recent window (this week or this month) with its highlight rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecentPeriod {
    #[serde(flatten)]
    pub totals: PeriodSummary,
    pub highlights: Vec<Highlight>,
}

/// The full dashboard payload for one sport, recomputed per query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsSnapshot {
    pub sport: Sport,
    pub all_time: AllTimeStats,
    pub ytd: YtdStats,
    pub this_week: RecentPeriod,
    pub this_month: RecentPeriod,
}

/// Assemble the complete snapshot from a fetched activity window.
///
/// `history_complete` marks a window that returned the athlete's entire
/// history, which always suffices for trend comparisons. An empty window
/// is an error rather than a zeroed snapshot, which would be
/// indistinguishable from a genuinely inactive athlete. An empty subset
/// after the sport filter is fine and produces zero totals.
pub fn build_snapshot(
    activities: &[Activity],
    sport: Sport,
    now: NaiveDateTime,
    history_complete: bool,
) -> Result<StatsSnapshot> {
    if activities.is_empty() {
        return Err(AppError::NoActivityData);
    }

    let filtered = sport.filter(activities);
    let windows = trend::year_windows(now);

    let all_time = AggregateTotals::from_activities(filtered.iter().copied());
    let ytd = totals_between(&filtered, windows.ytd_start, now);
    let prior = totals_between(&filtered, windows.prior_start, windows.prior_end);

    // Sufficiency is judged on the unfiltered window: the fetch is
    // sport-agnostic, so its reach is too.
    let trends = if trend::has_sufficient_history(activities, windows.prior_start, history_complete)
    {
        Some(trend::ytd_trends(sport, &ytd, &prior))
    } else {
        None
    };

    let week_start = buckets::week_start(now.date()).and_time(NaiveTime::MIN);
    let month_start = first_of_month(now.date());

    Ok(StatsSnapshot {
        sport,
        all_time: AllTimeStats {
            totals: PeriodSummary::from_totals(&all_time, sport),
            growth: trend::growth_rates(sport, &ytd, &all_time),
        },
        ytd: YtdStats {
            totals: PeriodSummary::from_totals(&ytd, sport),
            trends,
        },
        this_week: recent_period(&filtered, sport, week_start, now),
        this_month: recent_period(&filtered, sport, month_start, now),
    })
}

fn totals_between(
    activities: &[&Activity],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AggregateTotals {
    AggregateTotals::from_activities(
        activities
            .iter()
            .copied()
            .filter(|a| a.start_date_local >= start && a.start_date_local <= end),
    )
}

fn first_of_month(today: NaiveDate) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
}

fn recent_period(
    filtered: &[&Activity],
    sport: Sport,
    start: NaiveDateTime,
    now: NaiveDateTime,
) -> RecentPeriod {
    let subset: Vec<&Activity> = filtered
        .iter()
        .copied()
        .filter(|a| a.start_date_local >= start && a.start_date_local <= now)
        .collect();

    let totals = AggregateTotals::from_activities(subset.iter().copied());
    let bests = PeriodBests::from_activities(&subset, sport.best_effort_targets());

    RecentPeriod {
        totals: PeriodSummary::from_totals(&totals, sport),
        highlights: period_highlights(sport, &totals, &bests),
    }
}

/// Highlight rows for a recent period, matching the dashboard card layout.
fn period_highlights(sport: Sport, totals: &AggregateTotals, bests: &PeriodBests) -> Vec<Highlight> {
    if totals.is_empty() {
        return Vec::new();
    }

    let distance_km = totals.distance_meters / 1000.0;
    let mut rows = Vec::new();

    match sport {
        Sport::Running => {
            rows.push(highlight(
                "Longest Run",
                format!("{:.1} km", bests.longest_distance_meters / 1000.0),
                "map",
            ));
            rows.push(highlight(
                "Avg Pace",
                format_pace(totals.moving_time_seconds, totals.distance_meters)
                    .unwrap_or_else(|| NO_DATA.to_string()),
                "timer",
            ));
            rows.extend(effort_rows(sport, bests));
        }
        Sport::Cycling => {
            rows.push(highlight(
                "Total Distance",
                format!("{:.1} km", distance_km),
                "map",
            ));
            let speed = if totals.moving_time_seconds == 0 {
                NO_DATA.to_string()
            } else {
                format!(
                    "{:.1} km/h",
                    totals.distance_meters / totals.moving_time_seconds as f64 * 3.6
                )
            };
            rows.push(highlight("Avg Speed", speed, "zap"));
            rows.extend(effort_rows(sport, bests));
        }
        Sport::Walking => {
            let steps = sport.estimated_steps(totals.distance_meters).unwrap_or(0);
            rows.push(highlight("Total Steps", format_count(steps), "footprints"));
            rows.push(highlight(
                "Total Distance",
                format!("{:.1} km", distance_km),
                "map",
            ));
            rows.push(highlight(
                "Avg Pace",
                format_pace(totals.moving_time_seconds, totals.distance_meters)
                    .unwrap_or_else(|| NO_DATA.to_string()),
                "timer",
            ));
            rows.push(highlight(
                "Longest Walk",
                format!("{:.1} km", bests.longest_distance_meters / 1000.0),
                "map",
            ));
            let calories = (distance_km * CALORIES_PER_KM).floor() as u64;
            rows.push(highlight(
                "Calories Burned",
                format!("{} kcal", format_count(calories)),
                "flame",
            ));
        }
    }

    rows
}

fn highlight(label: &str, value: String, icon: &str) -> Highlight {
    Highlight {
        label: label.to_string(),
        value,
        icon: icon.to_string(),
    }
}

/// Best-effort rows for the first few targets. An uncovered target keeps
/// its row with a placeholder value instead of a zero time.
fn effort_rows(sport: Sport, bests: &PeriodBests) -> Vec<Highlight> {
    sport
        .best_effort_targets()
        .iter()
        .take(EFFORT_HIGHLIGHT_ROWS)
        .map(|&target| {
            let value = bests
                .effort_for(target)
                .map(|secs| format_clock(secs.round() as u64))
                .unwrap_or_else(|| NO_DATA.to_string());
            highlight(&format!("Fastest {}", target_label(target)), value, "timer")
        })
        .collect()
}

/// "5km", "21.1km" style label for a target distance.
fn target_label(target_meters: u32) -> String {
    if target_meters % 1000 == 0 {
        format!("{}km", target_meters / 1000)
    } else {
        format!("{:.1}km", f64::from(target_meters) / 1000.0)
    }
}
