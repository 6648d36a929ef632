// SPDX-License-Identifier: MIT

//! Decontamination stations, fixed and mobile.

use serde::{Deserialize, Serialize};

/// Which provincial program a fixed station belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeconProgram {
    Nb,
    Qc,
}

/// A fixed decontamination station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeconStation {
    pub station_id: String,
    pub station_name: Option<String>,
    pub location_name: String,
    pub station_type: String,
    pub operational_status: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl DeconStation {
    /// Quebec stations carry `STA`-prefixed ids; everything else is NB.
    pub fn program(&self) -> DeconProgram {
        if self.station_id.starts_with("STA") {
            DeconProgram::Qc
        } else {
            DeconProgram::Nb
        }
    }
}

/// A mobile decontamination unit, active only inside its time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobileDeconStation {
    pub id: String,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Window start (ISO 8601)
    pub start_time: String,
    /// Window end (ISO 8601)
    pub end_time: String,
    pub notes: Option<String>,
}
