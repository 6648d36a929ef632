// SPDX-License-Identifier: MIT

//! Movement-flow aggregation for launches.
//!
//! Check-ins are recorded once and never dual-written as flows; the backend
//! view derives per-trip movement rows, and this service groups them into
//! counted edges for rendering.

use crate::db::PostgrestDb;
use crate::error::Result;
use crate::models::flow::{FlowDirection, FlowEdge, MovementRow};
use std::collections::HashMap;

/// Service for loading and aggregating boater movement flows.
#[derive(Clone)]
pub struct FlowService {
    db: PostgrestDb,
}

impl FlowService {
    pub fn new(db: PostgrestDb) -> Self {
        Self { db }
    }

    /// Aggregated movement edges for one launch in one direction.
    ///
    /// A launch with no recorded movements produces an empty edge set, not
    /// an error. Each load is independent and idempotent; a later load
    /// simply replaces the previous edge set.
    pub async fn edges_for_launch(
        &self,
        launch_name: &str,
        direction: FlowDirection,
    ) -> Result<Vec<FlowEdge>> {
        let raw = self.db.movement_rows(launch_name.trim()).await?;
        let rows: Vec<MovementRow> = raw.iter().filter_map(MovementRow::from_row).collect();

        let dropped = raw.len() - rows.len();
        if dropped > 0 {
            tracing::debug!(
                launch = launch_name,
                dropped,
                "Dropped malformed movement rows"
            );
        }

        Ok(aggregate_edges(&rows, direction))
    }
}

/// Group movement rows into counted edges for one direction.
///
/// Edges are keyed by waterbody id plus the exact coordinate pair; the
/// coordinate component keeps two id-less legacy waterbodies apart. Pure
/// function of its input: the same rows produce the same edges in the same
/// order regardless of input order, and the input is never mutated.
pub fn aggregate_edges(rows: &[MovementRow], direction: FlowDirection) -> Vec<FlowEdge> {
    let kind = direction.movement_kind();
    let mut edges: HashMap<(Option<String>, u64, u64), FlowEdge> = HashMap::new();

    for row in rows {
        if row.kind != kind {
            continue;
        }
        if !row.latitude.is_finite() || !row.longitude.is_finite() {
            continue;
        }

        let key = (
            row.waterbody_id.clone(),
            row.latitude.to_bits(),
            row.longitude.to_bits(),
        );
        edges
            .entry(key)
            .or_insert_with(|| FlowEdge {
                waterbody_id: row.waterbody_id.clone(),
                name: row.waterbody_name.clone(),
                latitude: row.latitude,
                longitude: row.longitude,
                count: 0,
            })
            .count += 1;
    }

    let mut edges: Vec<FlowEdge> = edges.into_values().collect();
    // Busiest edges first; coordinate tiebreak keeps the order stable for
    // same-count, same-name legacy entries.
    edges.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.latitude.total_cmp(&b.latitude))
            .then_with(|| a.longitude.total_cmp(&b.longitude))
    });
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::flow::MovementKind;

    fn row(kind: MovementKind, id: Option<&str>, name: &str, lat: f64, lon: f64) -> MovementRow {
        MovementRow {
            launch: "Smith's Landing".to_string(),
            kind,
            waterbody_id: id.map(String::from),
            waterbody_name: name.to_string(),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn test_outgoing_edges_grouped_and_counted() {
        // 5 check-ins: 3 to Grand Lake, 2 to Miramichi River
        let rows = vec![
            row(MovementKind::Next, Some("42"), "Grand Lake", 45.85, -66.1),
            row(MovementKind::Next, Some("42"), "Grand Lake", 45.85, -66.1),
            row(MovementKind::Next, Some("42"), "Grand Lake", 45.85, -66.1),
            row(MovementKind::Next, Some("77"), "Miramichi River", 46.9, -65.8),
            row(MovementKind::Next, Some("77"), "Miramichi River", 46.9, -65.8),
        ];

        let edges = aggregate_edges(&rows, FlowDirection::Outgoing);

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].name, "Grand Lake");
        assert_eq!(edges[0].count, 3);
        assert_eq!(edges[1].name, "Miramichi River");
        assert_eq!(edges[1].count, 2);
    }

    #[test]
    fn test_direction_filter() {
        let rows = vec![
            row(MovementKind::Previous, Some("1"), "Oromocto Lake", 45.6, -66.6),
            row(MovementKind::Next, Some("2"), "Grand Lake", 45.85, -66.1),
        ];

        let incoming = aggregate_edges(&rows, FlowDirection::Incoming);
        assert_eq!(incoming.len(), 1);
        assert_eq!(incoming[0].name, "Oromocto Lake");

        let outgoing = aggregate_edges(&rows, FlowDirection::Outgoing);
        assert_eq!(outgoing.len(), 1);
        assert_eq!(outgoing[0].name, "Grand Lake");
    }

    #[test]
    fn test_order_independence() {
        let mut rows = vec![
            row(MovementKind::Next, Some("42"), "Grand Lake", 45.85, -66.1),
            row(MovementKind::Next, Some("77"), "Miramichi River", 46.9, -65.8),
            row(MovementKind::Next, Some("42"), "Grand Lake", 45.85, -66.1),
            row(MovementKind::Next, None, "Old Mill Pond", 45.1, -66.9),
        ];

        let forward = aggregate_edges(&rows, FlowDirection::Outgoing);
        rows.reverse();
        let reversed = aggregate_edges(&rows, FlowDirection::Outgoing);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let rows = vec![
            row(MovementKind::Next, Some("42"), "Grand Lake", 45.85, -66.1),
            row(MovementKind::Next, Some("42"), "Grand Lake", 45.85, -66.1),
        ];

        assert_eq!(
            aggregate_edges(&rows, FlowDirection::Outgoing),
            aggregate_edges(&rows, FlowDirection::Outgoing)
        );
    }

    #[test]
    fn test_idless_rows_split_by_coordinates() {
        // Two legacy waterbodies with no id must not merge into one edge.
        let rows = vec![
            row(MovementKind::Next, None, "Mill Pond", 45.1, -66.9),
            row(MovementKind::Next, None, "Mill Pond", 45.4, -66.2),
        ];

        let edges = aggregate_edges(&rows, FlowDirection::Outgoing);
        assert_eq!(edges.len(), 2);
        assert!(edges.iter().all(|e| e.count == 1));
    }

    #[test]
    fn test_non_finite_rows_excluded() {
        let rows = vec![
            row(MovementKind::Next, Some("42"), "Grand Lake", 45.85, -66.1),
            row(MovementKind::Next, Some("9"), "Broken Lake", f64::NAN, -66.1),
            row(MovementKind::Next, Some("9"), "Broken Lake", 45.0, f64::INFINITY),
        ];

        let edges = aggregate_edges(&rows, FlowDirection::Outgoing);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].name, "Grand Lake");
    }

    #[test]
    fn test_empty_input_yields_empty_edge_set() {
        assert!(aggregate_edges(&[], FlowDirection::Incoming).is_empty());
    }

    #[test]
    fn test_single_trip_edge_has_count_one() {
        let rows = vec![row(MovementKind::Previous, Some("3"), "Lonely Lake", 46.2, -67.3)];

        let edges = aggregate_edges(&rows, FlowDirection::Incoming);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].count, 1);
    }
}
