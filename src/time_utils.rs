// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, NaiveDateTime};

/// Parse a Strava `start_date_local` timestamp as naive local wall-clock time.
///
/// Strava formats local start times as RFC3339 with a `Z` suffix even though
/// the value is the athlete's local time, so the offset is discarded rather
/// than converted.
pub fn parse_start_date_local(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
}

/// Format a duration as "3h 25m".
pub fn format_hours_minutes(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// Format a duration as "24:02", switching to "1:07:21" at one hour.
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Format an average pace as "5:20 /km". Returns `None` for zero distance.
pub fn format_pace(moving_time_seconds: u64, distance_meters: f64) -> Option<String> {
    if distance_meters <= 0.0 {
        return None;
    }
    let seconds_per_km = moving_time_seconds as f64 / (distance_meters / 1000.0);
    let rounded = seconds_per_km.round() as u64;
    Some(format!("{}:{:02} /km", rounded / 60, rounded % 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_start_date_local_with_z_suffix() {
        let parsed = parse_start_date_local("2024-03-15T07:30:00Z").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(parsed.hour(), 7);
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn test_parse_start_date_local_keeps_wall_clock_for_offsets() {
        // The offset is dropped, not applied
        let parsed = parse_start_date_local("2024-03-15T07:30:00+09:00").unwrap();
        assert_eq!(parsed.hour(), 7);
    }

    #[test]
    fn test_parse_start_date_local_bare_format() {
        let parsed = parse_start_date_local("2024-03-15T07:30:00").unwrap();
        assert_eq!(parsed.hour(), 7);
    }

    #[test]
    fn test_parse_start_date_local_rejects_garbage() {
        assert!(parse_start_date_local("not-a-date").is_none());
        assert!(parse_start_date_local("").is_none());
    }

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(0), "0h 0m");
        assert_eq!(format_hours_minutes(11_700), "3h 15m");
        assert_eq!(format_hours_minutes(3_599), "0h 59m");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1_442), "24:02");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(4_041), "1:07:21");
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(1_500, 5_000.0), Some("5:00 /km".to_string()));
        assert_eq!(format_pace(1_600, 5_000.0), Some("5:20 /km".to_string()));
        assert_eq!(format_pace(1_500, 0.0), None);
    }
}
