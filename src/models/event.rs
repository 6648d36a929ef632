// SPDX-License-Identifier: MIT

//! Tournament events and their organizers.

use serde::{Deserialize, Serialize};

/// A tournament event. Coordinates may be absent for events announced
/// before a venue is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub event_name: Option<String>,
    pub organizer_id: Option<String>,
    /// Start date (ISO 8601)
    pub start: Option<String>,
    /// End date (ISO 8601); equals `start` for single-day events
    pub end: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A tournament organizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organizer {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub active: Option<bool>,
}
