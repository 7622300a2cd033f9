// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete profile served to the dashboard header.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Athlete profile as served to the frontend.
///
/// Missing Strava fields are replaced with the display fallbacks the
/// dashboard expects instead of being forwarded as nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AthleteProfile {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub bio: String,
    pub profile_medium: Option<String>,
    pub city: String,
    pub country: String,
}
