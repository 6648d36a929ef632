// SPDX-License-Identifier: MIT

//! Notification feed rows and per-user read tracking.

use serde::{Deserialize, Serialize};

/// A broadcast notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: Option<String>,
}

/// Read marker row, keyed by (notification, user).
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRead {
    pub notification_id: String,
}

/// Insert shape for marking a notification read.
#[derive(Debug, Clone, Serialize)]
pub struct NewNotificationRead {
    pub notification_id: String,
    pub user_id: String,
}
