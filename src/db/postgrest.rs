// SPDX-License-Identifier: MIT

//! Data API client wrapper with typed operations.
//!
//! Talks to the hosted Postgres backend over its REST interface. Filters use
//! the `column=op.value` query form; row-level security is enforced by the
//! backend from the forwarded session token, so there is no client-side
//! authorization logic here.
//!
//! Provides high-level operations for:
//! - Waterbodies (search and disambiguation reads)
//! - Launches and movement flows (backend views)
//! - Check-ins (single-row inserts)
//! - Events, stations, notifications, species, sighting reports

use crate::db::tables;
use crate::error::AppError;
use crate::models::checkin::CheckinRow;
use crate::models::event::{Event, Organizer};
use crate::models::notification::{NewNotificationRead, Notification, NotificationRead};
use crate::models::species::{ConfirmedReport, NewSightingReport, Species};
use crate::models::station::{DeconStation, MobileDeconStation};
use crate::models::waterbody::RawWaterbody;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Data API client.
#[derive(Clone)]
pub struct PostgrestDb {
    client: Option<Inner>,
}

#[derive(Clone)]
struct Inner {
    http: reqwest::Client,
    rest_url: String,
    anon_key: String,
}

impl PostgrestDb {
    /// Create a new client for the given backend project.
    pub fn new(backend_url: &str, anon_key: &str) -> Self {
        Self {
            client: Some(Inner {
                http: reqwest::Client::new(),
                rest_url: format!("{}/rest/v1", backend_url.trim_end_matches('/')),
                anon_key: anon_key.to_string(),
            }),
        }
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All data operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&Inner, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Backend("Data API not connected (offline mode)".to_string()))
    }

    fn select(&self, table: &str) -> Result<SelectQuery<'_>, AppError> {
        Ok(SelectQuery {
            client: self.get_client()?,
            table: table.to_string(),
            params: Vec::new(),
            auth: None,
        })
    }

    /// Insert a single row. `Prefer: return=minimal` keeps responses empty.
    async fn insert<T: Serialize>(
        &self,
        table: &str,
        row: &T,
        token: Option<&str>,
    ) -> Result<(), AppError> {
        let client = self.get_client()?;
        let url = format!("{}/{}", client.rest_url, table);

        let response = client
            .http
            .post(&url)
            .header("apikey", &client.anon_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(token.unwrap_or(&client.anon_key))
            .json(row)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        check_response(response).await
    }

    /// Upsert a single row, merging on the given conflict target.
    async fn upsert<T: Serialize>(
        &self,
        table: &str,
        row: &T,
        on_conflict: &str,
        token: Option<&str>,
    ) -> Result<(), AppError> {
        let client = self.get_client()?;
        let url = format!("{}/{}", client.rest_url, table);

        let response = client
            .http
            .post(&url)
            .header("apikey", &client.anon_key)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .bearer_auth(token.unwrap_or(&client.anon_key))
            .query(&[("on_conflict", on_conflict)])
            .json(row)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        check_response(response).await
    }

    // ─── Waterbody Operations ────────────────────────────────────

    /// Waterbodies in a region whose normalized name contains `key`.
    pub async fn waterbodies_matching(
        &self,
        region: &str,
        key: &str,
        limit: u32,
    ) -> Result<Vec<RawWaterbody>, AppError> {
        self.select(tables::WATERBODIES)?
            .eq("region", region)
            .ilike_contains("search_name_norm", key)
            .order("search_name.asc")
            .limit(limit)
            .fetch()
            .await
    }

    /// Waterbodies in a region whose normalized name equals `key` exactly.
    pub async fn waterbodies_by_key(
        &self,
        region: &str,
        key: &str,
    ) -> Result<Vec<RawWaterbody>, AppError> {
        self.select(tables::WATERBODIES)?
            .eq("region", region)
            .eq("search_name_norm", key)
            .fetch()
            .await
    }

    // ─── Launch & Flow Operations ────────────────────────────────

    /// Launches annotated with movement activity.
    ///
    /// Returned loose; rows cross the launch normalization boundary at the
    /// caller.
    pub async fn launch_rows(&self) -> Result<Vec<Value>, AppError> {
        self.select(tables::LAUNCH_ACTIVITY)?
            .order("name.asc")
            .fetch()
            .await
    }

    /// All movement rows recorded for a launch, both directions.
    pub async fn movement_rows(&self, launch_name: &str) -> Result<Vec<Value>, AppError> {
        self.select(tables::LAUNCH_FLOWS)?
            .eq("boat_launch", launch_name)
            .fetch()
            .await
    }

    // ─── Check-in Operations ─────────────────────────────────────

    /// Insert one check-in row under the submitting user's session.
    pub async fn insert_checkin(&self, row: &CheckinRow, token: &str) -> Result<(), AppError> {
        self.insert(tables::LAUNCH_CHECKINS, row, Some(token)).await
    }

    // ─── Event Operations ────────────────────────────────────────

    pub async fn events(&self) -> Result<Vec<Event>, AppError> {
        self.select(tables::EVENTS)?.order("start.asc").fetch().await
    }

    /// Active organizers, ordered by name.
    pub async fn organizers(&self) -> Result<Vec<Organizer>, AppError> {
        self.select(tables::ORGANIZERS)?
            .eq("active", "true")
            .order("name.asc")
            .fetch()
            .await
    }

    // ─── Decon Station Operations ────────────────────────────────

    pub async fn decon_stations(&self) -> Result<Vec<DeconStation>, AppError> {
        self.select(tables::DECON_STATIONS)?.fetch().await
    }

    /// Mobile units whose active window covers `now` (ISO 8601).
    pub async fn mobile_stations_active(
        &self,
        now: &str,
    ) -> Result<Vec<MobileDeconStation>, AppError> {
        self.select(tables::MOBILE_DECON_STATIONS)?
            .lte("start_time", now)
            .gte("end_time", now)
            .fetch()
            .await
    }

    // ─── Notification Operations ─────────────────────────────────

    /// All notifications, newest first.
    pub async fn notifications(&self) -> Result<Vec<Notification>, AppError> {
        self.select(tables::NOTIFICATIONS)?
            .columns("id,title,body,created_at")
            .order("created_at.desc")
            .fetch()
            .await
    }

    /// Ids of notifications the user has read.
    pub async fn notification_reads(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<Vec<NotificationRead>, AppError> {
        self.select(tables::NOTIFICATION_READS)?
            .columns("notification_id")
            .eq("user_id", user_id)
            .auth(token)
            .fetch()
            .await
    }

    /// Mark one notification read for a user. Idempotent.
    pub async fn mark_notification_read(
        &self,
        notification_id: &str,
        user_id: &str,
        token: &str,
    ) -> Result<(), AppError> {
        let row = NewNotificationRead {
            notification_id: notification_id.to_string(),
            user_id: user_id.to_string(),
        };
        self.upsert(
            tables::NOTIFICATION_READS,
            &row,
            "notification_id,user_id",
            Some(token),
        )
        .await
    }

    // ─── Species & Report Operations ─────────────────────────────

    /// Active species in display order.
    pub async fn species(&self) -> Result<Vec<Species>, AppError> {
        self.select(tables::SPECIES)?
            .columns("id,common_name,scientific_name,image_url,info_url")
            .eq("active", "true")
            .order("sort_order.asc")
            .fetch()
            .await
    }

    /// Insert one sighting report under the submitting user's session.
    pub async fn insert_report(
        &self,
        row: &NewSightingReport,
        token: &str,
    ) -> Result<(), AppError> {
        self.insert(tables::SIGHTING_REPORTS, row, Some(token)).await
    }

    /// Confirmed, publicly visible reports with their species embedded.
    pub async fn confirmed_reports(
        &self,
        species_id: Option<&str>,
    ) -> Result<Vec<ConfirmedReport>, AppError> {
        let mut query = self
            .select(tables::SIGHTING_REPORTS)?
            .columns(
                "id,latitude,longitude,created_at,\
                 species:species_id(id,common_name,scientific_name,image_url,info_url)",
            )
            .eq("public_visible", "true")
            .eq("status", "confirmed");

        if let Some(id) = species_id {
            query = query.eq("species_id", id);
        }

        query.fetch().await
    }
}

/// Fluent read query against one table or view.
struct SelectQuery<'a> {
    client: &'a Inner,
    table: String,
    params: Vec<(String, String)>,
    auth: Option<String>,
}

impl SelectQuery<'_> {
    fn columns(mut self, cols: &str) -> Self {
        self.params.push(("select".to_string(), cols.to_string()));
        self
    }

    fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    fn ilike_contains(mut self, column: &str, needle: &str) -> Self {
        self.params
            .push((column.to_string(), format!("ilike.*{needle}*")));
        self
    }

    fn lte(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("lte.{value}")));
        self
    }

    fn gte(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("gte.{value}")));
        self
    }

    /// Ordering in `column.direction` form, e.g. `search_name.asc`.
    fn order(mut self, expr: &str) -> Self {
        self.params.push(("order".to_string(), expr.to_string()));
        self
    }

    fn limit(mut self, n: u32) -> Self {
        self.params.push(("limit".to_string(), n.to_string()));
        self
    }

    /// Forward a user session token so row-level security applies.
    fn auth(mut self, token: &str) -> Self {
        self.auth = Some(token.to_string());
        self
    }

    async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, AppError> {
        let url = format!("{}/{}", self.client.rest_url, self.table);
        let bearer = self.auth.as_deref().unwrap_or(&self.client.anon_key);

        let response = self
            .client
            .http
            .get(&url)
            .header("apikey", &self.client.anon_key)
            .bearer_auth(bearer)
            .query(&self.params)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        check_response_json(response).await
    }
}

/// Check response status and return an error if not successful.
async fn check_response(response: reqwest::Response) -> Result<(), AppError> {
    if response.status().is_success() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.as_u16() == 401 {
        return Err(AppError::InvalidToken);
    }

    Err(AppError::Backend(format!("HTTP {}: {}", status, body)))
}

/// Check response and parse the JSON body.
async fn check_response_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.as_u16() == 401 {
            return Err(AppError::InvalidToken);
        }

        return Err(AppError::Backend(format!("HTTP {}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Backend(format!("JSON parse error: {}", e)))
}
