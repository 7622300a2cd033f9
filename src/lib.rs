// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Paceboard: personal fitness analytics from Strava activity data
//!
//! This crate provides the backend API that fetches an athlete's recent
//! Strava activities and derives the dashboard statistics, charts,
//! heatmap and weekly story from them.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod stats;
pub mod time_utils;

use config::Config;
use services::DashboardService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub dashboard: DashboardService,
}
