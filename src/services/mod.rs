// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - external API access and dashboard orchestration.

pub mod dashboard;
pub mod strava;

pub use dashboard::DashboardService;
pub use strava::{ActivityWindow, StravaClient, StravaService};
