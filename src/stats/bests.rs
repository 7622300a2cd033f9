// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-window records: longest efforts and estimated best times.

use crate::models::Activity;
use std::collections::BTreeMap;

/// Extremes and estimated best efforts for one reporting window.
///
/// `best_efforts` only carries targets that at least one activity covered.
/// A missing key means "no data", never a zero time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodBests {
    pub longest_distance_meters: f64,
    pub biggest_climb_meters: f64,
    /// Fastest estimated seconds, keyed by target distance in meters.
    pub best_efforts: BTreeMap<u32, f64>,
}

impl PeriodBests {
    /// Fold one activity into the records.
    pub fn fold(&mut self, activity: &Activity, targets: &[u32]) {
        if activity.distance_meters > self.longest_distance_meters {
            self.longest_distance_meters = activity.distance_meters;
        }
        if activity.elevation_gain_meters > self.biggest_climb_meters {
            self.biggest_climb_meters = activity.elevation_gain_meters;
        }
        for &target in targets {
            if let Some(estimate) = estimate_effort(activity, target) {
                self.best_efforts
                    .entry(target)
                    .and_modify(|best| *best = best.min(estimate))
                    .or_insert(estimate);
            }
        }
    }

    /// Track a whole window in one pass.
    pub fn from_activities(activities: &[&Activity], targets: &[u32]) -> Self {
        let mut bests = Self::default();
        for activity in activities {
            bests.fold(activity, targets);
        }
        bests
    }

    /// Best estimated seconds for a target, if any activity covered it.
    pub fn effort_for(&self, target_meters: u32) -> Option<f64> {
        self.best_efforts.get(&target_meters).copied()
    }
}

/// Estimate the time to cover `target_meters` from one activity's average
/// pace.
///
/// This is a straight linear extrapolation (`moving_time * target /
/// distance`), not a best-segment search within the activity. Only
/// activities at least as long as the target qualify.
pub fn estimate_effort(activity: &Activity, target_meters: u32) -> Option<f64> {
    let target = f64::from(target_meters);
    if activity.distance_meters <= 0.0 || activity.distance_meters < target {
        return None;
    }
    Some(activity.moving_time_seconds as f64 * target / activity.distance_meters)
}
