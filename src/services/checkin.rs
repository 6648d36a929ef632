// SPDX-License-Identifier: MIT

//! Trip check-in recording.

use crate::db::PostgrestDb;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::checkin::{CheckinRequest, CheckinRow, WaterbodyChoice};
use validator::Validate;

/// Service for recording trip check-ins.
#[derive(Clone)]
pub struct CheckinService {
    db: PostgrestDb,
}

impl CheckinService {
    pub fn new(db: PostgrestDb) -> Self {
        Self { db }
    }

    /// Record one check-in for the authenticated user.
    ///
    /// The single row insert is the only side effect; movement flows are
    /// derived from the check-ins table by a backend view. A rejected
    /// insert surfaces the error so the client keeps its form state.
    pub async fn submit(&self, user: &AuthUser, request: CheckinRequest) -> Result<()> {
        let row = build_row(&user.user_id, request)?;
        self.db.insert_checkin(&row, &user.token).await?;

        tracing::info!(
            launch = %row.launch_name,
            prev = %row.prev_waterbody,
            next = %row.next_waterbody,
            "Check-in recorded"
        );
        Ok(())
    }
}

/// Validate a submission and denormalize it into a storable row.
///
/// Both legs must carry a selection; the previous leg must be named or
/// resolved, while the next leg may be the explicit undecided sentinel.
pub fn build_row(user_id: &str, request: CheckinRequest) -> Result<CheckinRow> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let previous = request
        .previous
        .ok_or_else(|| AppError::BadRequest("Both trip legs are required".to_string()))?;
    let next = request
        .next
        .ok_or_else(|| AppError::BadRequest("Both trip legs are required".to_string()))?;

    if matches!(previous.waterbody, WaterbodyChoice::Undecided) {
        return Err(AppError::BadRequest(
            "The previous waterbody must be named or resolved".to_string(),
        ));
    }

    let (prev_waterbody, prev_waterbody_id) = previous.waterbody.storage_fields();
    let (next_waterbody, next_waterbody_id) = next.waterbody.storage_fields();

    Ok(CheckinRow {
        launch_id: request.launch_id,
        launch_name: request.launch_name,
        prev_province: previous.province,
        prev_waterbody,
        prev_waterbody_id,
        next_province: next.province,
        next_waterbody,
        next_waterbody_id,
        user_id: user_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::checkin::TripLeg;

    fn leg(province: &str, waterbody: WaterbodyChoice) -> TripLeg {
        TripLeg {
            province: province.to_string(),
            waterbody,
        }
    }

    fn request(previous: Option<TripLeg>, next: Option<TripLeg>) -> CheckinRequest {
        CheckinRequest {
            launch_id: Some("L1".to_string()),
            launch_name: "Smith's Landing".to_string(),
            previous,
            next,
        }
    }

    #[test]
    fn test_missing_previous_leg_rejected() {
        let result = build_row(
            "user-1",
            request(
                None,
                Some(leg("New Brunswick", WaterbodyChoice::Undecided)),
            ),
        );
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_missing_next_leg_rejected() {
        let result = build_row(
            "user-1",
            request(
                Some(leg(
                    "New Brunswick",
                    WaterbodyChoice::Named {
                        name: "Grand Lake".to_string(),
                    },
                )),
                None,
            ),
        );
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_undecided_previous_leg_rejected() {
        let result = build_row(
            "user-1",
            request(
                Some(leg("New Brunswick", WaterbodyChoice::Undecided)),
                Some(leg(
                    "New Brunswick",
                    WaterbodyChoice::Named {
                        name: "Grand Lake".to_string(),
                    },
                )),
            ),
        );
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_resolved_previous_with_undecided_next() {
        let row = build_row(
            "user-1",
            request(
                Some(leg(
                    "New Brunswick",
                    WaterbodyChoice::Resolved {
                        id: 42,
                        name: "Grand Lake".to_string(),
                    },
                )),
                Some(leg("New Brunswick", WaterbodyChoice::Undecided)),
            ),
        )
        .unwrap();

        assert_eq!(row.prev_waterbody, "Grand Lake");
        assert_eq!(row.prev_waterbody_id, Some(42));
        assert_eq!(row.next_waterbody, "Haven't decided yet");
        assert_eq!(row.next_waterbody_id, None);
        assert_eq!(row.user_id, "user-1");
    }

    #[test]
    fn test_named_legs_store_null_ids() {
        let row = build_row(
            "user-1",
            request(
                Some(leg(
                    "Quebec",
                    WaterbodyChoice::Named {
                        name: "Lac Témiscouata".to_string(),
                    },
                )),
                Some(leg(
                    "New Brunswick",
                    WaterbodyChoice::Named {
                        name: "Miramichi River".to_string(),
                    },
                )),
            ),
        )
        .unwrap();

        assert_eq!(row.prev_waterbody_id, None);
        assert_eq!(row.next_waterbody_id, None);
        assert_eq!(row.prev_province, "Quebec");
    }

    #[test]
    fn test_blank_launch_name_rejected() {
        let result = build_row(
            "user-1",
            CheckinRequest {
                launch_id: None,
                launch_name: String::new(),
                previous: Some(leg(
                    "New Brunswick",
                    WaterbodyChoice::Named {
                        name: "Grand Lake".to_string(),
                    },
                )),
                next: Some(leg("New Brunswick", WaterbodyChoice::Undecided)),
            },
        );
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
