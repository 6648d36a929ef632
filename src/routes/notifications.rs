// SPDX-License-Identifier: MIT

//! Notification feed and per-user read tracking.

use crate::error::Result;
use crate::middleware::auth::{user_from_headers, AuthUser};
use crate::models::Notification;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/notifications", get(get_notifications))
}

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/notifications/{id}/read", post(mark_read))
}

#[derive(Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    /// Ids the caller has read; empty without a session
    pub read_ids: Vec<String>,
}

/// Notifications newest-first.
///
/// With a valid session token the caller's read ids are included; without
/// one the feed is served read-only.
async fn get_notifications(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<NotificationsResponse>> {
    let notifications = state.db.notifications().await?;

    let read_ids = match user_from_headers(&headers, &state.config.jwt_secret) {
        Some(user) => state
            .db
            .notification_reads(&user.user_id, &user.token)
            .await?
            .into_iter()
            .map(|r| r.notification_id)
            .collect(),
        None => {
            tracing::debug!("No session; serving notifications read-only");
            Vec::new()
        }
    };

    Ok(Json(NotificationsResponse {
        notifications,
        read_ids,
    }))
}

#[derive(Serialize)]
pub struct MarkReadResponse {
    pub success: bool,
}

/// Idempotently mark one notification read for the authenticated user.
async fn mark_read(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<MarkReadResponse>> {
    state
        .db
        .mark_notification_read(&id, &user.user_id, &user.token)
        .await?;

    Ok(Json(MarkReadResponse { success: true }))
}
