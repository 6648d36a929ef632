// SPDX-License-Identifier: MIT

//! Waterbody reference data and search-key normalization.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Raw waterbody row as returned by the data API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWaterbody {
    pub id: i64,
    pub search_name: String,
    pub search_name_norm: Option<String>,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub name_count: Option<i64>,
}

/// A named body of water, scoped to a region. Read-only reference data.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Waterbody {
    pub id: i64,
    /// Display name (e.g. "Long Lake")
    pub name: String,
    /// Accent/case-folded name used for lookups
    pub key: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Number of distinct waterbodies in the region sharing this key
    pub collision_count: u32,
}

impl From<RawWaterbody> for Waterbody {
    fn from(raw: RawWaterbody) -> Self {
        // Older rows predate the indexed key column; fold the name ourselves.
        let key = raw
            .search_name_norm
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| normalize_key(&raw.search_name));

        Self {
            id: raw.id,
            name: raw.search_name,
            key,
            region: raw.region,
            latitude: raw.latitude,
            longitude: raw.longitude,
            collision_count: raw.name_count.unwrap_or(1).max(1) as u32,
        }
    }
}

/// Fold a display name into its lookup key: trim, lowercase, decompose,
/// strip combining marks. Idempotent.
pub fn normalize_key(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    lowered.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_strips_accents_and_case() {
        assert_eq!(normalize_key("Lac Témiscouata"), "lac temiscouata");
        assert_eq!(normalize_key("  Rivière-à-l'Ours "), "riviere-a-l'ours");
    }

    #[test]
    fn test_normalize_key_is_idempotent() {
        for input in ["Lac Témiscouata", "GRAND Lake", "  éàü  ", "already plain"] {
            let once = normalize_key(input);
            assert_eq!(normalize_key(&once), once);
        }
    }

    #[test]
    fn test_raw_conversion_falls_back_to_folded_name() {
        let raw = RawWaterbody {
            id: 7,
            search_name: "Lac Unique".to_string(),
            search_name_norm: None,
            region: "QC".to_string(),
            latitude: 47.0,
            longitude: -69.0,
            name_count: None,
        };

        let waterbody = Waterbody::from(raw);
        assert_eq!(waterbody.key, "lac unique");
        assert_eq!(waterbody.collision_count, 1);
    }

    #[test]
    fn test_raw_conversion_keeps_backend_key_and_count() {
        let raw = RawWaterbody {
            id: 1,
            search_name: "Long Lake".to_string(),
            search_name_norm: Some("long lake".to_string()),
            region: "NB".to_string(),
            latitude: 46.0,
            longitude: -66.0,
            name_count: Some(3),
        };

        let waterbody = Waterbody::from(raw);
        assert_eq!(waterbody.key, "long lake");
        assert_eq!(waterbody.collision_count, 3);
    }
}
