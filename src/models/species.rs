// SPDX-License-Identifier: MIT

//! Invasive species reference data and sighting reports.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// An invasive species tracked for sighting reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    pub id: String,
    pub common_name: String,
    pub scientific_name: String,
    pub image_url: Option<String>,
    pub info_url: Option<String>,
}

/// Sighting report submission payload.
///
/// Photo capture and upload happen against the storage service directly;
/// the report only carries the resulting public URL, if any.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReportRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[validate(length(max = 200))]
    pub species_guess: Option<String>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    #[validate(length(max = 2000))]
    pub photo_url: Option<String>,
}

/// Row inserted into the sighting reports table. Reports start `pending`
/// and are confirmed out-of-band by reviewers.
#[derive(Debug, Clone, Serialize)]
pub struct NewSightingReport {
    pub latitude: f64,
    pub longitude: f64,
    pub species_guess: Option<String>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
    pub status: String,
    pub user_id: Option<String>,
}

/// A confirmed, publicly visible report with its species embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmedReport {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: Option<String>,
    pub species: Option<Species>,
}
