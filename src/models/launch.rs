// SPDX-License-Identifier: MIT

//! Boat launch model and loose-row normalization boundary.

use crate::models::raw::{numeric_field, string_field};
use serde::Serialize;
use serde_json::Value;

/// A boat launch with backend-derived movement activity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Whether any check-in references this launch (derived by the backend)
    pub has_movement: bool,
    pub movement_count: u32,
}

impl Launch {
    /// Normalize a loose backend row into a strict record.
    ///
    /// Handles `Name` vs `name` vs `launch_name`, cased coordinate columns,
    /// numbers arriving as strings, and null/duplicate ids (a stable
    /// synthetic id is derived from the row position and coordinates).
    /// Rows without usable, in-bounds coordinates are dropped.
    pub fn from_row(row: &Value, index: usize) -> Option<Launch> {
        let latitude = numeric_field(row, &["Latitude", "latitude", "Lat", "lat"])?;
        let longitude = numeric_field(
            row,
            &["Longitude", "longitude", "Lng", "lng", "Long", "long"],
        )?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }

        let name = string_field(row, &["Name", "name", "launch_name"]).unwrap_or_default();
        let name = if name.is_empty() {
            format!("Unnamed launch ({:.4}, {:.4})", latitude, longitude)
        } else {
            name
        };

        let id = string_field(row, &["id", "ID", "launch_id", "uuid"])
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("row-{}-{}-{}-{}", index, name, latitude, longitude));

        let movement_count = numeric_field(row, &["movement_count"]).unwrap_or(0.0) as u32;
        let has_movement = row
            .get("has_movement")
            .and_then(Value::as_bool)
            .unwrap_or(movement_count > 0);

        Some(Launch {
            id,
            name,
            latitude,
            longitude,
            has_movement,
            movement_count,
        })
    }
}
