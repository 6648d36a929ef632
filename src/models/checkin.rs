// SPDX-License-Identifier: MIT

//! Trip check-in payloads and the stored row shape.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Name stored when the boater has not decided on the next waterbody.
pub const UNDECIDED_WATERBODY: &str = "Haven't decided yet";

/// Waterbody selection for one trip leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaterbodyChoice {
    /// Resolved to a specific waterbody row (directly or via disambiguation)
    Resolved { id: i64, name: String },
    /// Display name only; never resolved to a row
    Named { name: String },
    /// Explicitly deferred. Valid for the next leg only.
    Undecided,
}

impl WaterbodyChoice {
    /// Denormalized (name, id) pair as stored on the check-in row.
    pub fn storage_fields(&self) -> (String, Option<i64>) {
        match self {
            WaterbodyChoice::Resolved { id, name } => (name.clone(), Some(*id)),
            WaterbodyChoice::Named { name } => (name.clone(), None),
            WaterbodyChoice::Undecided => (UNDECIDED_WATERBODY.to_string(), None),
        }
    }
}

/// One leg of a trip: where the boat came from, or goes next.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct TripLeg {
    #[validate(length(min = 1, max = 100))]
    pub province: String,
    pub waterbody: WaterbodyChoice,
}

/// Check-in submission payload.
///
/// Both legs must be present before a submission is accepted; the check is
/// semantic (in the service) rather than structural so a missing leg gets a
/// clear rejection instead of a deserialization error.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckinRequest {
    pub launch_id: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub launch_name: String,
    #[validate(nested)]
    pub previous: Option<TripLeg>,
    #[validate(nested)]
    pub next: Option<TripLeg>,
}

/// Row inserted into the check-ins table. Written exactly once per
/// submission and never updated or deleted; movement flows are derived from
/// this table by a backend view, not dual-written.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckinRow {
    pub launch_id: Option<String>,
    pub launch_name: String,
    pub prev_province: String,
    pub prev_waterbody: String,
    pub prev_waterbody_id: Option<i64>,
    pub next_province: String,
    pub next_waterbody: String,
    pub next_waterbody_id: Option<i64>,
    pub user_id: String,
}
