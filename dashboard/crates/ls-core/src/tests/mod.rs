mod models;
mod notifications;

use crate::{ActivityKind, DisplayNotification, NotificationIcon, NotificationId, Severity};

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

/// Notification with a fixed id, for list tests.
pub(crate) fn notification_with_id(id: u64) -> DisplayNotification {
    DisplayNotification {
        id: NotificationId::new(id),
        severity: Severity::Info,
        title: format!("Title {id}"),
        message: format!("Message {id}"),
        relative_time: String::from("Just now"),
        read: false,
        kind: ActivityKind::Unknown,
        details: BTreeMap::new(),
        icon: NotificationIcon::Info,
        occurred_at: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
    }
}
