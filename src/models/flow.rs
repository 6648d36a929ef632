// SPDX-License-Identifier: MIT

//! Boater movement rows and derived flow edges.

use crate::models::raw::{as_f64, as_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Direction of travel relative to a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    /// Trips whose previous waterbody pointed toward this launch
    Incoming,
    /// Trips whose next waterbody points away from it
    Outgoing,
}

impl FlowDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "incoming" => Some(FlowDirection::Incoming),
            "outgoing" => Some(FlowDirection::Outgoing),
            _ => None,
        }
    }

    /// The movement kind this direction selects from the flow view.
    pub fn movement_kind(self) -> MovementKind {
        match self {
            FlowDirection::Incoming => MovementKind::Previous,
            FlowDirection::Outgoing => MovementKind::Next,
        }
    }
}

/// Which trip leg a movement row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Previous,
    Next,
}

/// One validated movement row from the launch flow view.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementRow {
    pub launch: String,
    pub kind: MovementKind,
    /// Missing on legacy rows that predate waterbody resolution
    pub waterbody_id: Option<String>,
    pub waterbody_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl MovementRow {
    /// Normalization boundary for loose view rows.
    ///
    /// Rows with an unknown movement type or non-finite destination
    /// coordinates are dropped here, so downstream aggregation never
    /// re-checks shapes.
    pub fn from_row(row: &Value) -> Option<MovementRow> {
        let kind = match row.get("movement_type").and_then(Value::as_str) {
            Some("previous") => MovementKind::Previous,
            Some("next") => MovementKind::Next,
            _ => return None,
        };

        let latitude = row.get("waterbody_lat").and_then(as_f64)?;
        let longitude = row.get("waterbody_lon").and_then(as_f64)?;

        Some(MovementRow {
            launch: row
                .get("boat_launch")
                .and_then(as_string)
                .unwrap_or_default(),
            kind,
            waterbody_id: row.get("waterbody_id").and_then(as_string),
            waterbody_name: row
                .get("waterbody_name")
                .and_then(as_string)
                .unwrap_or_default(),
            latitude,
            longitude,
        })
    }
}

/// Aggregated, counted movement between a launch and one waterbody.
/// Derived on demand from movement rows; never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlowEdge {
    pub waterbody_id: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Number of contributing trips
    pub count: u32,
}
