// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Normalized activity record consumed by the stats engine.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single activity, normalized from Strava's list payload.
///
/// `start_date_local` is the athlete's wall-clock start time and is kept
/// naive: buckets, comparison windows and heatmap days are all defined in
/// the athlete's local calendar, so no timezone conversion is ever applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    pub id: u64,
    /// Raw Strava sport type (Run, Ride, Hike, ...)
    pub sport_type: String,
    /// Local wall-clock start time
    pub start_date_local: NaiveDateTime,
    /// Distance in meters
    pub distance_meters: f64,
    /// Moving time in seconds
    pub moving_time_seconds: u64,
    /// Total elevation gain in meters
    pub elevation_gain_meters: f64,
}
