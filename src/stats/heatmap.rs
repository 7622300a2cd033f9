// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily intensity derivation for the trailing-year calendar grid.

use crate::models::Activity;
use crate::stats::sport::Sport;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Days covered by one heatmap query.
pub const LOOKBACK_DAYS: usize = 365;

/// One calendar day in the heatmap grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    pub distance_meters: f64,
    /// 0 for rest days, otherwise 1 through 4
    pub intensity: u8,
}

/// Build one `HeatmapDay` per day for the trailing year ending `today`,
/// oldest first.
///
/// Distances from activities on the same calendar day accumulate before
/// the intensity is derived; days outside the window are ignored.
pub fn build_heatmap(activities: &[&Activity], sport: Sport, today: NaiveDate) -> Vec<HeatmapDay> {
    let first = today - Duration::days(LOOKBACK_DAYS as i64 - 1);
    let divisor = sport.heatmap_divisor();

    let mut distance_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for activity in activities {
        let day = activity.start_date_local.date();
        if day >= first && day <= today {
            *distance_by_day.entry(day).or_insert(0.0) += activity.distance_meters;
        }
    }

    (0..LOOKBACK_DAYS)
        .map(|offset| {
            let date = first + Duration::days(offset as i64);
            let distance_meters = distance_by_day.get(&date).copied().unwrap_or(0.0);
            HeatmapDay {
                date,
                distance_meters,
                intensity: intensity_for(distance_meters, divisor),
            }
        })
        .collect()
}

/// Intensity bucket for one day's distance: 0 for rest days, otherwise
/// `ceil(distance / divisor)` capped at 4.
fn intensity_for(distance_meters: f64, divisor: f64) -> u8 {
    if distance_meters <= 0.0 {
        return 0;
    }
    (distance_meters / divisor).ceil().min(4.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn starting(date: NaiveDate, hour: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, 0, 0).unwrap()
    }

    fn make_activity(start: NaiveDateTime, distance: f64) -> Activity {
        Activity {
            id: 1,
            sport_type: "Run".to_string(),
            start_date_local: start,
            distance_meters: distance,
            moving_time_seconds: 1800,
            elevation_gain_meters: 0.0,
        }
    }

    #[test]
    fn test_intensity_thresholds_running() {
        assert_eq!(intensity_for(0.0, 5000.0), 0);
        assert_eq!(intensity_for(1.0, 5000.0), 1);
        assert_eq!(intensity_for(5000.0, 5000.0), 1);
        assert_eq!(intensity_for(5001.0, 5000.0), 2);
        assert_eq!(intensity_for(20_000.0, 5000.0), 4);
        assert_eq!(intensity_for(90_000.0, 5000.0), 4);
    }

    #[test]
    fn test_cycling_uses_wider_divisor() {
        assert_eq!(intensity_for(15_000.0, Sport::Cycling.heatmap_divisor()), 1);
        assert_eq!(intensity_for(45_000.0, Sport::Cycling.heatmap_divisor()), 3);
    }

    #[test]
    fn test_covers_exactly_one_trailing_year() {
        let today = day(2024, 12, 6);
        let grid = build_heatmap(&[], Sport::Running, today);

        assert_eq!(grid.len(), LOOKBACK_DAYS);
        assert_eq!(grid[0].date, day(2023, 12, 8));
        assert_eq!(grid.last().unwrap().date, today);
        assert!(grid.iter().all(|d| d.intensity == 0));
    }

    #[test]
    fn test_single_run_lights_exactly_one_day() {
        let today = day(2024, 12, 6);
        let run = make_activity(starting(day(2024, 12, 3), 7), 5000.0);
        let refs = vec![&run];

        let grid = build_heatmap(&refs, Sport::Running, today);

        for entry in &grid {
            if entry.date == day(2024, 12, 3) {
                assert_eq!(entry.intensity, 1);
            } else {
                assert_eq!(entry.intensity, 0);
            }
        }
    }

    #[test]
    fn test_same_day_distances_accumulate_before_intensity() {
        let today = day(2024, 12, 6);
        let morning = make_activity(starting(day(2024, 12, 3), 7), 3000.0);
        let evening = make_activity(starting(day(2024, 12, 3), 18), 2500.0);
        let refs = vec![&morning, &evening];

        let grid = build_heatmap(&refs, Sport::Running, today);
        let entry = grid.iter().find(|d| d.date == day(2024, 12, 3)).unwrap();

        assert_eq!(entry.distance_meters, 5500.0);
        assert_eq!(entry.intensity, 2);
    }

    #[test]
    fn test_days_outside_window_ignored() {
        let today = day(2024, 12, 6);
        let ancient = make_activity(starting(day(2022, 5, 1), 7), 10_000.0);
        let refs = vec![&ancient];

        let grid = build_heatmap(&refs, Sport::Running, today);
        assert!(grid.iter().all(|d| d.distance_meters == 0.0));
    }
}
