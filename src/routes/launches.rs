// SPDX-License-Identifier: MIT

//! Launch map data and movement flow routes.

use crate::error::{AppError, Result};
use crate::models::flow::{FlowDirection, FlowEdge};
use crate::models::Launch;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Dropdown-sized result bound for name searches.
const MAX_SEARCH_MATCHES: usize = 8;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/launches", get(get_launches))
        .route("/api/launches/{name}/flows", get(get_launch_flows))
}

#[derive(Deserialize)]
struct LaunchesParams {
    /// Optional case-insensitive name filter
    q: Option<String>,
}

#[derive(Serialize)]
pub struct LaunchesResponse {
    pub launches: Vec<Launch>,
}

/// Launches annotated with movement activity.
///
/// Rows cross the loose-row normalization boundary here; rows without
/// usable coordinates are dropped rather than breaking the whole map.
async fn get_launches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LaunchesParams>,
) -> Result<Json<LaunchesResponse>> {
    let raw = state.db.launch_rows().await?;
    let mut launches: Vec<Launch> = raw
        .iter()
        .enumerate()
        .filter_map(|(index, row)| Launch::from_row(row, index))
        .collect();

    let dropped = raw.len() - launches.len();
    if dropped > 0 {
        tracing::debug!(total = raw.len(), dropped, "Dropped unusable launch rows");
    }

    if let Some(q) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        let needle = q.to_lowercase();
        launches.retain(|l| l.name.to_lowercase().contains(&needle));
        launches.truncate(MAX_SEARCH_MATCHES);
    }

    Ok(Json(LaunchesResponse { launches }))
}

#[derive(Deserialize)]
struct FlowsParams {
    direction: String,
}

#[derive(Serialize)]
pub struct FlowsResponse {
    pub launch: String,
    pub direction: FlowDirection,
    pub flows: Vec<FlowEdge>,
}

/// Aggregated movement edges for one launch.
async fn get_launch_flows(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<FlowsParams>,
) -> Result<Json<FlowsResponse>> {
    let direction = FlowDirection::parse(&params.direction).ok_or_else(|| {
        AppError::BadRequest("direction must be 'incoming' or 'outgoing'".to_string())
    })?;

    tracing::debug!(launch = %name, ?direction, "Loading movement flows");

    let flows = state.flow_service.edges_for_launch(&name, direction).await?;

    Ok(Json(FlowsResponse {
        launch: name,
        direction,
        flows,
    }))
}
