// SPDX-License-Identifier: MIT

//! Waterbody search and same-name disambiguation.

use crate::db::PostgrestDb;
use crate::error::Result;
use crate::models::waterbody::{normalize_key, Waterbody};
use geo::{BoundingRect, MultiPoint, Point};
use serde::Serialize;
use std::collections::HashSet;

/// Upper bound on candidates returned by a search.
const SEARCH_LIMIT: u32 = 25;
/// Minimum normalized query length before a backend query is issued.
const MIN_QUERY_CHARS: usize = 2;
/// Fractional padding added around fitted candidate bounds.
const VIEWPORT_PADDING: f64 = 0.2;
/// Span used when a single candidate is shown (degrees).
const SINGLE_POINT_SPAN: f64 = 1.2;
/// Smallest span for a fitted viewport (degrees).
const MIN_SPAN: f64 = 0.05;

/// Service for waterbody name search and spatial disambiguation.
#[derive(Clone)]
pub struct WaterbodyService {
    db: PostgrestDb,
}

/// Disambiguation payload: every waterbody sharing a name key, plus a map
/// viewport fitting all of them.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateSet {
    pub candidates: Vec<Waterbody>,
    /// None when there are no candidates to fit
    pub viewport: Option<Viewport>,
}

/// Map region centered on the candidates with padded spans.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl WaterbodyService {
    pub fn new(db: PostgrestDb) -> Self {
        Self { db }
    }

    /// Region-scoped, accent-insensitive waterbody search.
    ///
    /// Queries under two normalized characters short-circuit to an empty
    /// result without touching the backend. Results are deduplicated by
    /// normalized name; an entry's `collision_count` says how many physical
    /// waterbodies it stands for. Backend failures degrade to an empty
    /// result and are logged, never surfaced to the caller.
    pub async fn search(&self, query: &str, region: &str) -> Vec<Waterbody> {
        let key = normalize_key(query);
        if key.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let rows = match self.db.waterbodies_matching(region, &key, SEARCH_LIMIT).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(error = %e, region, "Waterbody search failed");
                return Vec::new();
            }
        };

        dedup_by_key(rows.into_iter().map(Waterbody::from))
    }

    /// All waterbodies in `region` sharing the exact normalized `key`.
    ///
    /// Zero candidates means the search index's collision count disagreed
    /// with the live table; that is an explicit empty payload, not an error.
    pub async fn candidates(&self, region: &str, key: &str) -> Result<CandidateSet> {
        let rows = self.db.waterbodies_by_key(region, key).await?;
        let candidates: Vec<Waterbody> = rows.into_iter().map(Waterbody::from).collect();

        if candidates.is_empty() {
            tracing::warn!(region, key, "No live rows for collision key");
        }

        let viewport = fit_viewport(&candidates);
        Ok(CandidateSet {
            candidates,
            viewport,
        })
    }
}

/// Collapse same-key entries into one, keeping backend name order.
fn dedup_by_key(rows: impl Iterator<Item = Waterbody>) -> Vec<Waterbody> {
    let mut seen = HashSet::new();
    rows.filter(|w| seen.insert(w.key.clone())).collect()
}

/// Fit a viewport around candidate coordinates.
///
/// A single candidate gets a fixed span; multiple candidates get their
/// bounding rect plus padding on each side.
fn fit_viewport(candidates: &[Waterbody]) -> Option<Viewport> {
    match candidates {
        [] => None,
        [only] => Some(Viewport {
            latitude: only.latitude,
            longitude: only.longitude,
            latitude_delta: SINGLE_POINT_SPAN,
            longitude_delta: SINGLE_POINT_SPAN,
        }),
        _ => {
            let points = MultiPoint::new(
                candidates
                    .iter()
                    .map(|w| Point::new(w.longitude, w.latitude))
                    .collect(),
            );
            let rect = points.bounding_rect()?;
            let center = rect.center();

            Some(Viewport {
                latitude: center.y,
                longitude: center.x,
                latitude_delta: (rect.height() * (1.0 + 2.0 * VIEWPORT_PADDING)).max(MIN_SPAN),
                longitude_delta: (rect.width() * (1.0 + 2.0 * VIEWPORT_PADDING)).max(MIN_SPAN),
            })
        }
    }
}
