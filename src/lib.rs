// SPDX-License-Identifier: MIT

//! Boater Tracker: record boater movement between launches and waterbodies
//!
//! This crate provides the backend API for the boater mobile app: waterbody
//! search and disambiguation, trip check-ins, movement-flow aggregation,
//! and the surrounding reference data, backed by a hosted Postgres data API.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::PostgrestDb;
use services::{CheckinService, FlowService, WaterbodyService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: PostgrestDb,
    pub waterbody_service: WaterbodyService,
    pub flow_service: FlowService,
    pub checkin_service: CheckinService,
}
