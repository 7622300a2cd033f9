//! Pure sum accumulation over activity subsets.

use crate::models::Activity;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Running sums for an activity subset.
///
/// Zero-initialized; every field only grows as activities are folded in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AggregateTotals {
    pub activities: u32,
    pub distance_meters: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub moving_time_seconds: u64,
    pub elevation_gain_meters: f64,
}

impl AggregateTotals {
    /// Fold one activity into the sums.
    pub fn fold(&mut self, activity: &Activity) {
        self.activities += 1;
        self.distance_meters += activity.distance_meters;
        self.moving_time_seconds += activity.moving_time_seconds;
        self.elevation_gain_meters += activity.elevation_gain_meters;
    }

    /// Merge partial sums.
    pub fn combine(&mut self, other: &AggregateTotals) {
        self.activities += other.activities;
        self.distance_meters += other.distance_meters;
        self.moving_time_seconds += other.moving_time_seconds;
        self.elevation_gain_meters += other.elevation_gain_meters;
    }

    /// Sum a whole subset in one pass.
    pub fn from_activities<'a, I>(activities: I) -> Self
    where
        I: IntoIterator<Item = &'a Activity>,
    {
        let mut totals = Self::default();
        for activity in activities {
            totals.fold(activity);
        }
        totals
    }

    pub fn is_empty(&self) -> bool {
        self.activities == 0
    }
}
