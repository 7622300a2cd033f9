// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trailing week/month bucket construction and activity assignment.

use crate::models::Activity;
use crate::stats::totals::AggregateTotals;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Buckets per chart query.
pub const BUCKET_COUNT: usize = 12;

/// Chart bucketing granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Week,
    Month,
}

impl Granularity {
    /// Parse a chart period name ("week" or "month").
    pub fn parse(raw: &str) -> Option<Granularity> {
        match raw {
            "week" => Some(Granularity::Week),
            "month" => Some(Granularity::Month),
            _ => None,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Week => f.write_str("week"),
            Granularity::Month => f.write_str("month"),
        }
    }
}

/// One chart bucket covering a single week or calendar month.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TimeBucket {
    /// Short axis label ("Dec 2" for weeks, "Mar" for months)
    pub label: String,
    /// Tooltip range ("Dec 2 - Dec 8" or "Mar 2024")
    pub range: String,
    /// First covered instant (local midnight)
    pub start: NaiveDateTime,
    /// Last covered instant
    pub end: NaiveDateTime,
    #[serde(flatten)]
    pub totals: AggregateTotals,
}

impl TimeBucket {
    fn new(start_day: NaiveDate, end_day: NaiveDate, label: String, range: String) -> Self {
        let start = start_day.and_time(NaiveTime::MIN);
        let end = end_day.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::milliseconds(1);
        Self {
            label,
            range,
            start,
            end,
            totals: AggregateTotals::default(),
        }
    }

    /// Whether a local timestamp falls inside this bucket. Both ends are
    /// inclusive; `end` is the last millisecond of the final day.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// First day of the month `offset` months away from (`year`, `month`).
///
/// Works in whole-month arithmetic so a month-end anchor like Jan 31 can
/// never skid into a neighboring month the way day subtraction would.
fn shift_month(year: i32, month: u32, offset: i32) -> NaiveDate {
    let total = year * 12 + month as i32 - 1 + offset;
    NaiveDate::from_ymd_opt(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32, 1)
        .unwrap_or_default()
}

/// Build the 12 empty buckets for a trailing window anchored at `now`,
/// oldest first.
///
/// Week buckets run Monday through Sunday; month buckets are whole calendar
/// months. The newest bucket always contains `now`.
pub fn build_buckets(now: NaiveDateTime, granularity: Granularity) -> Vec<TimeBucket> {
    let today = now.date();
    let mut buckets = Vec::with_capacity(BUCKET_COUNT);

    match granularity {
        Granularity::Week => {
            let current = week_start(today);
            for back in (0..BUCKET_COUNT).rev() {
                let start = current - Duration::weeks(back as i64);
                let end = start + Duration::days(6);
                let label = start.format("%b %-d").to_string();
                let range = format!("{} - {}", label, end.format("%b %-d"));
                buckets.push(TimeBucket::new(start, end, label, range));
            }
        }
        Granularity::Month => {
            for back in (0..BUCKET_COUNT).rev() {
                let start = shift_month(today.year(), today.month(), -(back as i32));
                let end = shift_month(start.year(), start.month(), 1) - Duration::days(1);
                let label = start.format("%b").to_string();
                let range = format!("{} {}", label, start.year());
                buckets.push(TimeBucket::new(start, end, label, range));
            }
        }
    }

    buckets
}

/// Fold each activity into the bucket containing its local start time.
///
/// Activities outside the trailing window are dropped, so the bucket sums
/// never exceed the per-activity sums over the same span.
pub fn assign_activities(buckets: &mut [TimeBucket], activities: &[&Activity]) {
    for activity in activities {
        if let Some(bucket) = buckets
            .iter_mut()
            .find(|b| b.contains(activity.start_date_local))
        {
            bucket.totals.fold(activity);
        }
    }
}

/// Build and populate the chart buckets for one query.
pub fn chart_buckets(
    activities: &[&Activity],
    granularity: Granularity,
    now: NaiveDateTime,
) -> Vec<TimeBucket> {
    let mut buckets = build_buckets(now, granularity);
    assign_activities(&mut buckets, activities);
    buckets
}
