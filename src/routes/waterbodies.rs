// SPDX-License-Identifier: MIT

//! Waterbody search and disambiguation routes.

use crate::error::{AppError, Result};
use crate::models::waterbody::Waterbody;
use crate::services::waterbody::CandidateSet;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_QUERY_LEN: usize = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/waterbodies/search", get(search_waterbodies))
        .route("/api/waterbodies/candidates", get(waterbody_candidates))
}

#[derive(Deserialize)]
struct SearchParams {
    q: String,
    region: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub results: Vec<Waterbody>,
}

/// Region-scoped fuzzy search over waterbody names.
///
/// Results are deduplicated by normalized name; entries with a collision
/// count above 1 need spatial disambiguation via the candidates endpoint.
async fn search_waterbodies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    if params.q.len() > MAX_QUERY_LEN {
        return Err(AppError::BadRequest("Query too long".to_string()));
    }
    if params.region.trim().is_empty() {
        return Err(AppError::BadRequest("A region is required".to_string()));
    }

    let results = state
        .waterbody_service
        .search(&params.q, params.region.trim())
        .await;

    Ok(Json(SearchResponse { results }))
}

#[derive(Deserialize)]
struct CandidatesParams {
    region: String,
    key: String,
}

/// Every waterbody sharing an exact normalized name key, with a viewport
/// fitting all of them for spatial selection.
async fn waterbody_candidates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CandidatesParams>,
) -> Result<Json<CandidateSet>> {
    let key = params.key.trim();
    if key.is_empty() {
        return Err(AppError::BadRequest("A name key is required".to_string()));
    }
    if params.region.trim().is_empty() {
        return Err(AppError::BadRequest("A region is required".to_string()));
    }

    let set = state
        .waterbody_service
        .candidates(params.region.trim(), key)
        .await?;

    Ok(Json(set))
}
