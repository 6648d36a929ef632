// SPDX-License-Identifier: MIT

use boater_tracker::config::Config;
use boater_tracker::db::PostgrestDb;
use boater_tracker::routes::create_router;
use boater_tracker::services::{CheckinService, FlowService, WaterbodyService};
use boater_tracker::AppState;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Create a mock data API client (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> PostgrestDb {
    PostgrestDb::new_mock()
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();

    let state = Arc::new(AppState {
        config,
        db: db.clone(),
        waterbody_service: WaterbodyService::new(db.clone()),
        flow_service: FlowService::new(db.clone()),
        checkin_service: CheckinService::new(db),
    });

    (create_router(state.clone()), state)
}

/// Create a signed session JWT for tests.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    #[derive(Serialize)]
    struct Claims {
        sub: String,
        role: String,
        exp: usize,
        iat: usize,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role: "authenticated".to_string(),
        exp: now + 86400,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )
    .unwrap()
}
