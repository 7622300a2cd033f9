// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Year-over-year trends and share-of-lifetime growth.

use crate::models::Activity;
use crate::stats::round1;
use crate::stats::sport::Sport;
use crate::stats::totals::AggregateTotals;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Comparison windows derived from one query anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearWindows {
    /// Jan 1 of the anchor year, local midnight
    pub ytd_start: NaiveDateTime,
    /// Jan 1 of the prior year, local midnight
    pub prior_start: NaiveDateTime,
    /// The anchor instant shifted back one year
    pub prior_end: NaiveDateTime,
}

/// Compute the YTD window and its prior-year equivalent for `now`.
pub fn year_windows(now: NaiveDateTime) -> YearWindows {
    let year = now.date().year();
    YearWindows {
        ytd_start: jan_first(year),
        prior_start: jan_first(year - 1),
        prior_end: shift_back_one_year(now),
    }
}

fn jan_first(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
}

/// Same calendar instant one year earlier, clamping Feb 29 to Feb 28.
fn shift_back_one_year(at: NaiveDateTime) -> NaiveDateTime {
    let date = at.date();
    let shifted = NaiveDate::from_ymd_opt(date.year() - 1, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(date.year() - 1, date.month(), 28))
        .unwrap_or(date);
    shifted.and_time(at.time())
}

/// Whether the fetched window reaches back far enough to cover
/// `window_start`.
///
/// A window that provably contains the athlete's whole history is always
/// sufficient. Otherwise the oldest fetched activity, across all sports,
/// must start at or before the window start, or a partially fetched prior
/// year would masquerade as a decline.
pub fn has_sufficient_history(
    activities: &[Activity],
    window_start: NaiveDateTime,
    history_complete: bool,
) -> bool {
    if history_complete {
        return true;
    }
    activities
        .iter()
        .map(|a| a.start_date_local)
        .min()
        .map_or(false, |oldest| oldest <= window_start)
}

/// Percentage change of `current` against `prior`, one decimal place.
///
/// A zero prior with a nonzero current reads as exactly +100%; two zeros
/// read as no change.
pub fn percent_change(current: f64, prior: f64) -> f64 {
    if prior == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        round1((current - prior) / prior * 100.0)
    }
}

/// Share of an all-time metric contributed by a partial period, one
/// decimal place. Zero when there is no lifetime volume at all.
pub fn growth_share(partial: f64, all_time: f64) -> f64 {
    if all_time == 0.0 {
        0.0
    } else {
        round1(partial / all_time * 100.0)
    }
}

/// Year-over-year percentage deltas for the core metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrendDeltas {
    pub activities: f64,
    pub distance: f64,
    pub time: f64,
    pub elevation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub steps: Option<f64>,
}

/// Compare YTD totals against the prior-year equivalent window.
pub fn ytd_trends(sport: Sport, current: &AggregateTotals, prior: &AggregateTotals) -> TrendDeltas {
    TrendDeltas {
        activities: percent_change(f64::from(current.activities), f64::from(prior.activities)),
        distance: percent_change(current.distance_meters, prior.distance_meters),
        time: percent_change(
            current.moving_time_seconds as f64,
            prior.moving_time_seconds as f64,
        ),
        elevation: percent_change(
            current.elevation_gain_meters,
            prior.elevation_gain_meters,
        ),
        steps: step_delta(sport, current, prior),
    }
}

/// Step trend from the floored step estimates, walking only.
fn step_delta(sport: Sport, current: &AggregateTotals, prior: &AggregateTotals) -> Option<f64> {
    let current_steps = sport.estimated_steps(current.distance_meters)?;
    let prior_steps = sport.estimated_steps(prior.distance_meters)?;
    Some(percent_change(current_steps as f64, prior_steps as f64))
}

/// Share-of-lifetime growth percentages for the core metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GrowthRates {
    pub activities: f64,
    pub distance: f64,
    pub time: f64,
    pub elevation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub steps: Option<f64>,
}

/// How much of the lifetime totals the YTD window contributed.
pub fn growth_rates(sport: Sport, ytd: &AggregateTotals, all_time: &AggregateTotals) -> GrowthRates {
    GrowthRates {
        activities: growth_share(f64::from(ytd.activities), f64::from(all_time.activities)),
        distance: growth_share(ytd.distance_meters, all_time.distance_meters),
        time: growth_share(
            ytd.moving_time_seconds as f64,
            all_time.moving_time_seconds as f64,
        ),
        elevation: growth_share(ytd.elevation_gain_meters, all_time.elevation_gain_meters),
        steps: step_growth(sport, ytd, all_time),
    }
}

fn step_growth(sport: Sport, ytd: &AggregateTotals, all_time: &AggregateTotals) -> Option<f64> {
    let ytd_steps = sport.estimated_steps(ytd.distance_meters)?;
    let all_time_steps = sport.estimated_steps(all_time.distance_meters)?;
    Some(growth_share(ytd_steps as f64, all_time_steps as f64))
}
