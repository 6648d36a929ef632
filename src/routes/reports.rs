// SPDX-License-Identifier: MIT

//! Invasive-species sighting report routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::species::{ConfirmedReport, NewSightingReport, ReportRequest};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/reports/confirmed", get(get_confirmed_reports))
}

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/reports", post(submit_report))
}

#[derive(Deserialize)]
struct ConfirmedParams {
    species_id: Option<String>,
}

#[derive(Serialize)]
pub struct ConfirmedReportsResponse {
    pub reports: Vec<ConfirmedReport>,
}

/// Confirmed, publicly visible sightings, optionally for one species.
async fn get_confirmed_reports(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConfirmedParams>,
) -> Result<Json<ConfirmedReportsResponse>> {
    let reports = state
        .db
        .confirmed_reports(params.species_id.as_deref())
        .await?;

    Ok(Json(ConfirmedReportsResponse { reports }))
}

#[derive(Serialize)]
pub struct ReportResponse {
    pub success: bool,
}

/// Submit a sighting report. Reports start `pending` and are reviewed
/// before becoming publicly visible.
async fn submit_report(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ReportRequest>,
) -> Result<(StatusCode, Json<ReportResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if !(-90.0..=90.0).contains(&payload.latitude)
        || !(-180.0..=180.0).contains(&payload.longitude)
        || !payload.latitude.is_finite()
        || !payload.longitude.is_finite()
    {
        return Err(AppError::BadRequest("Invalid coordinates".to_string()));
    }

    let row = NewSightingReport {
        latitude: payload.latitude,
        longitude: payload.longitude,
        species_guess: none_if_blank(payload.species_guess),
        notes: none_if_blank(payload.notes),
        photo_url: none_if_blank(payload.photo_url),
        status: "pending".to_string(),
        user_id: Some(user.user_id.clone()),
    };

    state.db.insert_report(&row, &user.token).await?;
    tracing::info!(user = %user.user_id, "Sighting report submitted");

    Ok((StatusCode::CREATED, Json(ReportResponse { success: true })))
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
