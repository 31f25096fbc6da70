use crate::{
    ActivityEnvelope, ActivityKind, DisplayNotification, NotificationIcon, NotificationId,
    Severity, format_relative_time,
};

use chrono::{DateTime, Local, Utc};

const DEFAULT_ACTOR: &str = "System";
const SAVED_AT_FORMAT: &str = "%H:%M:%S";

/// Map an activity envelope to the notification shown in the dropdown.
///
/// Total over every [`ActivityKind`]: `Unknown` falls through to a generic
/// "System Activity" notification, so title and message are never empty.
pub fn build_notification(envelope: ActivityEnvelope, now: DateTime<Utc>) -> DisplayNotification {
    let occurred_at = envelope.occurred_at.unwrap_or(now);
    let actor = envelope.actor().unwrap_or(DEFAULT_ACTOR);

    let (severity, title, message) = match envelope.kind {
        ActivityKind::UserRegistered => (
            Severity::Success,
            "New User Registration",
            format!(
                "{actor} just registered as {}",
                envelope.detail("role").unwrap_or("user")
            ),
        ),
        ActivityKind::UserLogin => (
            Severity::Info,
            "User Login",
            format!("{actor} logged into the system"),
        ),
        ActivityKind::HospitalAdded => (
            Severity::Success,
            "New Hospital Added",
            format!(
                "Hospital \"{}\" has been added",
                envelope.detail("hospital_name").unwrap_or("Unknown")
            ),
        ),
        ActivityKind::SlaughterhouseAdded => (
            Severity::Success,
            "New Slaughterhouse Added",
            format!(
                "Slaughterhouse \"{}\" has been added",
                envelope.detail("slaughterhouse_name").unwrap_or("Unknown")
            ),
        ),
        ActivityKind::FeedbackSubmitted => (
            Severity::Info,
            "New Feedback",
            format!(
                "Feedback submitted for {}",
                envelope.detail("target_name").unwrap_or("Unknown")
            ),
        ),
        ActivityKind::UserUpdated => (
            Severity::Info,
            "Profile Updated",
            format!("{actor}'s profile has been updated"),
        ),
        ActivityKind::UserDeleted => (
            Severity::Warning,
            "Account Deleted",
            format!(
                "{} account has been deleted",
                envelope.detail("deleted_user").unwrap_or("User")
            ),
        ),
        ActivityKind::AutoSave => {
            let saved_at = envelope.detail("savedAt").map(String::from).unwrap_or_else(|| {
                occurred_at
                    .with_timezone(&Local)
                    .format(SAVED_AT_FORMAT)
                    .to_string()
            });
            (
                Severity::Info,
                "Auto Save Complete",
                format!("Data automatically saved at {saved_at}"),
            )
        }
        ActivityKind::Unknown => (
            Severity::Info,
            "System Activity",
            String::from("New activity detected on the platform"),
        ),
    };

    DisplayNotification {
        id: NotificationId::next(),
        severity,
        title: title.to_string(),
        message,
        relative_time: format_relative_time(occurred_at, now),
        read: false,
        kind: envelope.kind,
        icon: NotificationIcon::for_activity(envelope.kind, severity),
        details: envelope.details,
        occurred_at,
    }
}
