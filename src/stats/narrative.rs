// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sport-specific insight cards and summary composition.

use crate::stats::bests::PeriodBests;
use crate::stats::format_count;
use crate::stats::sport::Sport;
use crate::stats::totals::AggregateTotals;
use crate::time_utils::{format_hours_minutes, format_pace};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Elevation above which a cycling period reads as a climbing block (m).
const BIG_CLIMBING_METERS: f64 = 500.0;

/// Distance above which a running period counts as high mileage (km).
const HIGH_MILEAGE_KM: f64 = 40.0;

/// Placeholder for a value the period's data cannot support.
const NO_VALUE: &str = "–";

/// One card in the story panel. `icon` and `color_hint` are presentation
/// hints for the frontend, not styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Insight {
    pub label: String,
    pub value: String,
    pub detail: String,
    pub icon: String,
    pub color_hint: String,
}

/// Narrative output for one period and sport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Story {
    pub summary: String,
    pub insights: Vec<Insight>,
}

/// Compose the story for one period from its aggregates and records.
///
/// A period with no activities produces the fixed rest-period story
/// instead of computed insights.
pub fn compose(
    period_label: &str,
    sport: Sport,
    totals: &AggregateTotals,
    bests: &PeriodBests,
) -> Story {
    if totals.is_empty() {
        return rest_story(period_label, sport);
    }

    let mut insights = vec![volume_insight(period_label, totals)];
    match sport {
        Sport::Cycling => {
            insights.push(climbing_insight(totals, bests));
            insights.push(speed_insight(totals));
            insights.push(longest_insight("Longest Ride", bests));
        }
        Sport::Running => {
            insights.push(pace_insight(totals));
            insights.push(longest_insight("Longest Run", bests));
            insights.push(time_on_feet_insight(period_label, totals));
        }
        Sport::Walking => {
            insights.push(steps_insight(sport, totals));
            insights.push(active_time_insight(period_label, totals));
            insights.push(consistency_insight(period_label, totals));
        }
    }

    Story {
        summary: summary_for(period_label, sport, totals),
        insights,
    }
}

fn rest_story(period_label: &str, sport: Sport) -> Story {
    Story {
        summary: format!(
            "No {} recorded {} yet. A rest period is part of training too.",
            sport_noun(sport),
            period_label
        ),
        insights: vec![Insight {
            label: "Recovery".to_string(),
            value: "Rest period".to_string(),
            detail: format!("No {} {}", sport_noun(sport), period_label),
            icon: "heart".to_string(),
            color_hint: "slate".to_string(),
        }],
    }
}

fn sport_noun(sport: Sport) -> &'static str {
    match sport {
        Sport::Running => "runs",
        Sport::Walking => "walks",
        Sport::Cycling => "rides",
    }
}

fn volume_insight(period_label: &str, totals: &AggregateTotals) -> Insight {
    Insight {
        label: "Volume".to_string(),
        value: format!("{:.1} km", totals.distance_meters / 1000.0),
        detail: format!("{} activities {}", totals.activities, period_label),
        icon: "map".to_string(),
        color_hint: "blue".to_string(),
    }
}

fn climbing_insight(totals: &AggregateTotals, bests: &PeriodBests) -> Insight {
    Insight {
        label: "Climbing".to_string(),
        value: format!("{:.0} m", totals.elevation_gain_meters),
        detail: format!("Biggest single climb {:.0} m", bests.biggest_climb_meters),
        icon: "mountain".to_string(),
        color_hint: "red".to_string(),
    }
}

fn speed_insight(totals: &AggregateTotals) -> Insight {
    let value = if totals.moving_time_seconds == 0 {
        NO_VALUE.to_string()
    } else {
        let kmh = totals.distance_meters / totals.moving_time_seconds as f64 * 3.6;
        format!("{:.1} km/h", kmh)
    };
    Insight {
        label: "Avg Speed".to_string(),
        value,
        detail: format!("Over {} moving", format_hours_minutes(totals.moving_time_seconds)),
        icon: "zap".to_string(),
        color_hint: "yellow".to_string(),
    }
}

fn pace_insight(totals: &AggregateTotals) -> Insight {
    let value = format_pace(totals.moving_time_seconds, totals.distance_meters)
        .unwrap_or_else(|| NO_VALUE.to_string());
    Insight {
        label: "Avg Pace".to_string(),
        value,
        detail: format!("Across {} runs", totals.activities),
        icon: "gauge".to_string(),
        color_hint: "indigo".to_string(),
    }
}

fn longest_insight(label: &str, bests: &PeriodBests) -> Insight {
    Insight {
        label: label.to_string(),
        value: format!("{:.1} km", bests.longest_distance_meters / 1000.0),
        detail: "Longest single outing".to_string(),
        icon: "trending-up".to_string(),
        color_hint: "green".to_string(),
    }
}

fn time_on_feet_insight(period_label: &str, totals: &AggregateTotals) -> Insight {
    Insight {
        label: "Time on Feet".to_string(),
        value: format_hours_minutes(totals.moving_time_seconds),
        detail: format!("Total moving time {}", period_label),
        icon: "heart".to_string(),
        color_hint: "rose".to_string(),
    }
}

fn steps_insight(sport: Sport, totals: &AggregateTotals) -> Insight {
    let steps = sport.estimated_steps(totals.distance_meters).unwrap_or(0);
    Insight {
        label: "Steps".to_string(),
        value: format_count(steps),
        detail: format!("Estimated from {:.1} km", totals.distance_meters / 1000.0),
        icon: "footprints".to_string(),
        color_hint: "orange".to_string(),
    }
}

fn active_time_insight(period_label: &str, totals: &AggregateTotals) -> Insight {
    Insight {
        label: "Active Time".to_string(),
        value: format_hours_minutes(totals.moving_time_seconds),
        detail: format!("Total duration {}", period_label),
        icon: "heart".to_string(),
        color_hint: "pink".to_string(),
    }
}

fn consistency_insight(period_label: &str, totals: &AggregateTotals) -> Insight {
    let value = if totals.activities >= 5 {
        "High"
    } else if totals.activities >= 2 {
        "Steady"
    } else {
        "Building"
    };
    Insight {
        label: "Consistency".to_string(),
        value: value.to_string(),
        detail: format!("{} walks {}", totals.activities, period_label),
        icon: "trending-up".to_string(),
        color_hint: "emerald".to_string(),
    }
}

fn summary_for(period_label: &str, sport: Sport, totals: &AggregateTotals) -> String {
    let km = totals.distance_meters / 1000.0;
    match sport {
        Sport::Cycling => {
            if totals.elevation_gain_meters > BIG_CLIMBING_METERS {
                format!(
                    "You rode {:.1} km {} with {:.0} m of climbing. Great climbing volume.",
                    km, period_label, totals.elevation_gain_meters
                )
            } else {
                format!(
                    "You rode {:.1} km across {} rides {}. Solid aerobic work.",
                    km, totals.activities, period_label
                )
            }
        }
        Sport::Running => {
            if km >= HIGH_MILEAGE_KM {
                format!(
                    "You ran {:.1} km {}. That is serious mileage and the base is growing.",
                    km, period_label
                )
            } else {
                format!(
                    "You ran {:.1} km across {} runs {}. Consistent work pays off.",
                    km, totals.activities, period_label
                )
            }
        }
        Sport::Walking => {
            let steps = sport.estimated_steps(totals.distance_meters).unwrap_or(0);
            format!(
                "You walked {:.1} km {}, roughly {} steps. Slow and steady wins the race.",
                km,
                period_label,
                format_count(steps)
            )
        }
    }
}
