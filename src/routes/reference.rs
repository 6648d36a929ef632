// SPDX-License-Identifier: MIT

//! Read-only reference data: events, organizers, decon stations, species.

use crate::error::Result;
use crate::models::station::DeconProgram;
use crate::models::{DeconStation, Event, MobileDeconStation, Organizer, Species};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Dropdown-sized result bound for name searches.
const MAX_SEARCH_MATCHES: usize = 8;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/events", get(get_events))
        .route("/api/organizers", get(get_organizers))
        .route("/api/stations", get(get_stations))
        .route("/api/species", get(get_species))
}

// ─── Events ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct EventsParams {
    /// Optional case-insensitive name filter
    q: Option<String>,
}

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// Tournament events, optionally filtered by a name substring.
async fn get_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsParams>,
) -> Result<Json<EventsResponse>> {
    let mut events = state.db.events().await?;

    if let Some(q) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        let needle = q.to_lowercase();
        events.retain(|e| {
            e.event_name
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
        });
        events.truncate(MAX_SEARCH_MATCHES);
    }

    Ok(Json(EventsResponse { events }))
}

#[derive(Serialize)]
pub struct OrganizersResponse {
    pub organizers: Vec<Organizer>,
}

/// Active tournament organizers, ordered by name.
async fn get_organizers(State(state): State<Arc<AppState>>) -> Result<Json<OrganizersResponse>> {
    let organizers = state.db.organizers().await?;
    Ok(Json(OrganizersResponse { organizers }))
}

// ─── Decon Stations ──────────────────────────────────────────

#[derive(Deserialize)]
struct StationsParams {
    /// Filter fixed stations to one provincial program
    province: Option<DeconProgram>,
}

#[derive(Serialize)]
pub struct StationsResponse {
    pub stations: Vec<DeconStation>,
    /// Mobile units currently inside their active window
    pub mobile_stations: Vec<MobileDeconStation>,
}

/// Fixed decon stations plus currently active mobile units.
async fn get_stations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StationsParams>,
) -> Result<Json<StationsResponse>> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let (mut stations, mobile_stations) = tokio::try_join!(
        state.db.decon_stations(),
        state.db.mobile_stations_active(&now),
    )?;

    if let Some(program) = params.province {
        stations.retain(|s| s.program() == program);
    }

    Ok(Json(StationsResponse {
        stations,
        mobile_stations,
    }))
}

// ─── Species ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SpeciesResponse {
    pub species: Vec<Species>,
}

/// Active invasive species in display order.
async fn get_species(State(state): State<Arc<AppState>>) -> Result<Json<SpeciesResponse>> {
    let species = state.db.species().await?;
    Ok(Json(SpeciesResponse { species }))
}
