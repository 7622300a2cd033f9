// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sport categories and their fixed per-sport constants.

use crate::models::Activity;
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Estimated walking steps per kilometer.
pub const STEPS_PER_KM: f64 = 1350.0;

/// Estimated walking calories burned per kilometer.
pub const CALORIES_PER_KM: f64 = 60.0;

/// Sport categories the dashboard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Running,
    Walking,
    Cycling,
}

impl Sport {
    /// Map a raw Strava sport type onto a dashboard category.
    ///
    /// The mapping is fixed and many-to-one. Kinds outside it (swims, ski
    /// runs, rowing, ...) are not reportable and yield `None`.
    pub fn from_sport_type(raw: &str) -> Option<Sport> {
        match raw {
            "Run" | "TrailRun" | "VirtualRun" => Some(Sport::Running),
            "Walk" | "Hike" => Some(Sport::Walking),
            "Ride" | "VirtualRide" | "EBikeRide" | "GravelRide" | "MountainBikeRide" => {
                Some(Sport::Cycling)
            }
            _ => None,
        }
    }

    /// Parse a dashboard category name ("running", "walking", "cycling").
    pub fn parse(raw: &str) -> Option<Sport> {
        match raw {
            "running" => Some(Sport::Running),
            "walking" => Some(Sport::Walking),
            "cycling" => Some(Sport::Cycling),
            _ => None,
        }
    }

    /// Keep only the activities belonging to this category, preserving order.
    pub fn filter<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        activities
            .iter()
            .filter(|a| Sport::from_sport_type(&a.sport_type) == Some(*self))
            .collect()
    }

    /// Fixed best-effort target distances for this category, in meters.
    pub fn best_effort_targets(&self) -> &'static [u32] {
        match self {
            Sport::Running | Sport::Walking => &[5_000, 10_000, 15_000, 21_097, 30_000, 42_195],
            Sport::Cycling => &[10_000, 20_000, 30_000, 40_000, 50_000],
        }
    }

    /// Meters of daily distance per heatmap intensity step.
    pub fn heatmap_divisor(&self) -> f64 {
        match self {
            Sport::Cycling => 20_000.0,
            Sport::Running | Sport::Walking => 5_000.0,
        }
    }

    /// Estimated step count for a distance. Walking only; other categories
    /// have no step metric at all rather than a zero.
    pub fn estimated_steps(&self, distance_meters: f64) -> Option<u64> {
        match self {
            Sport::Walking => Some((distance_meters / 1000.0 * STEPS_PER_KM).floor() as u64),
            _ => None,
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sport::Running => "running",
            Sport::Walking => "walking",
            Sport::Cycling => "cycling",
        };
        f.write_str(name)
    }
}
