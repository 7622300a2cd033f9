// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paceboard API Server
//!
//! Serves the personal fitness dashboard by fetching trailing Strava
//! activity windows and deriving stats, charts, heatmaps and stories.

use paceboard::{
    config::Config,
    services::{DashboardService, StravaService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Paceboard API");

    // Initialize the Strava fetch service with its shared window cache
    let strava_service = StravaService::new(
        config.strava_api_base.clone(),
        config.activity_page_size,
    );
    tracing::info!(
        base_url = %config.strava_api_base,
        page_size = config.activity_page_size,
        "Strava service initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        dashboard: DashboardService::new(strava_service),
    });

    // Build router
    let app = paceboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("paceboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
