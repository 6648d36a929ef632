//! Data access layer (hosted Postgres data API).

pub mod postgrest;

pub use postgrest::PostgrestDb;

/// Table and view names as constants.
pub mod tables {
    pub const WATERBODIES: &str = "waterbodies";
    pub const LAUNCH_CHECKINS: &str = "launch_checkins";
    /// Launches annotated with movement activity (backend view)
    pub const LAUNCH_ACTIVITY: &str = "launches_with_activity_real";
    /// Check-in derived movement rows (backend view)
    pub const LAUNCH_FLOWS: &str = "launch_flows_v2";
    pub const EVENTS: &str = "events";
    pub const ORGANIZERS: &str = "organizers";
    pub const DECON_STATIONS: &str = "decon_stations";
    pub const MOBILE_DECON_STATIONS: &str = "mobile_decon_stations";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const NOTIFICATION_READS: &str = "notification_reads";
    pub const SPECIES: &str = "species";
    pub const SIGHTING_REPORTS: &str = "ais_reports";
}
