// SPDX-License-Identifier: MIT

//! Boater Tracker API Server
//!
//! Serves the boater mobile app: launch and event maps, decon stations,
//! waterbody search and disambiguation, trip check-ins and movement flows,
//! all backed by a hosted Postgres data API.

use boater_tracker::{
    config::Config,
    db::PostgrestDb,
    services::{CheckinService, FlowService, WaterbodyService},
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
    tracing::info!(port = config.port, "Starting Boater Tracker API");

    // Initialize the data API client
    let db = PostgrestDb::new(&config.backend_url, &config.backend_anon_key);
    tracing::info!(backend = %config.backend_url, "Data API client initialized");

    let waterbody_service = WaterbodyService::new(db.clone());
    let flow_service = FlowService::new(db.clone());
    let checkin_service = CheckinService::new(db.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        waterbody_service,
        flow_service,
        checkin_service,
    });

    // Build router
    let app = boater_tracker::routes::create_router(state);

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
                .add_directive("boater_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
