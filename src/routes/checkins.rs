// SPDX-License-Identifier: MIT

//! Trip check-in routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::CheckinRequest;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Check-in routes (require authentication via session JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/checkins", post(submit_checkin))
}

#[derive(Serialize)]
pub struct CheckinResponse {
    pub success: bool,
}

/// Record a trip check-in for the authenticated user.
async fn submit_checkin(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CheckinRequest>,
) -> Result<(StatusCode, Json<CheckinResponse>)> {
    state.checkin_service.submit(&user, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckinResponse { success: true }),
    ))
}
