use crate::{ActivityKind, NotificationIcon, NotificationId, Severity, format_relative_time};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UI-ready form of an activity envelope, as shown in the notification dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayNotification {
    pub id: NotificationId,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub relative_time: String,
    pub read: bool,
    pub kind: ActivityKind,
    pub details: BTreeMap<String, String>,
    pub icon: NotificationIcon,
    pub occurred_at: DateTime<Utc>,
}

impl DisplayNotification {
    /// Recompute `relative_time` against `now` (called before rendering).
    pub fn refresh_relative_time(&mut self, now: DateTime<Utc>) {
        self.relative_time = format_relative_time(self.occurred_at, now);
    }
}
