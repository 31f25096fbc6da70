use crate::{
    ActivityEnvelope, ActivityKind, NotificationIcon, Severity, build_notification,
};

use chrono::{DateTime, Duration, TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{eq, gt};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

// =========================================================================
// Per-Kind Mapping
// =========================================================================

#[test]
fn given_hospital_added_when_built_then_success_with_hospital_name() {
    // Given
    let envelope = ActivityEnvelope::new(ActivityKind::HospitalAdded)
        .with_actor("Dr. Sara Khan")
        .with_detail("hospital_name", "City Vet")
        .occurred_at(now() - Duration::minutes(5));

    // When
    let notification = build_notification(envelope, now());

    // Then
    assert_that!(notification.severity, eq(Severity::Success));
    assert_that!(notification.title.as_str(), eq("New Hospital Added"));
    assert_that!(
        notification.message.as_str(),
        eq("Hospital \"City Vet\" has been added")
    );
    assert_that!(notification.relative_time.as_str(), eq("5 mins ago"));
    assert_that!(notification.icon, eq(NotificationIcon::Building));
    assert_that!(notification.read, eq(false));
}

#[test]
fn given_user_registered_without_role_when_built_then_defaults_to_user() {
    let envelope = ActivityEnvelope::new(ActivityKind::UserRegistered).with_actor("Ali");

    let notification = build_notification(envelope, now());

    assert_that!(notification.title.as_str(), eq("New User Registration"));
    assert_that!(notification.message.as_str(), eq("Ali just registered as user"));
    assert_that!(notification.icon, eq(NotificationIcon::UserPlus));
}

#[test]
fn given_user_login_without_actor_when_built_then_system_actor() {
    let notification = build_notification(ActivityEnvelope::new(ActivityKind::UserLogin), now());

    assert_that!(notification.severity, eq(Severity::Info));
    assert_that!(notification.message.as_str(), eq("System logged into the system"));
    assert_that!(notification.relative_time.as_str(), eq("Just now"));
}

#[test]
fn given_slaughterhouse_without_name_when_built_then_unknown_name() {
    let notification = build_notification(
        ActivityEnvelope::new(ActivityKind::SlaughterhouseAdded),
        now(),
    );

    assert_that!(
        notification.message.as_str(),
        eq("Slaughterhouse \"Unknown\" has been added")
    );
    assert_that!(notification.icon, eq(NotificationIcon::Package));
}

#[test]
fn given_feedback_when_built_then_names_target() {
    let envelope = ActivityEnvelope::new(ActivityKind::FeedbackSubmitted)
        .with_detail("target_name", "Green Abattoir");

    let notification = build_notification(envelope, now());

    assert_that!(notification.title.as_str(), eq("New Feedback"));
    assert_that!(
        notification.message.as_str(),
        eq("Feedback submitted for Green Abattoir")
    );
    assert_that!(notification.icon, eq(NotificationIcon::Info));
}

#[test]
fn given_user_updated_when_built_then_possessive_message() {
    let envelope = ActivityEnvelope::new(ActivityKind::UserUpdated).with_actor("Ali");

    let notification = build_notification(envelope, now());

    assert_that!(notification.message.as_str(), eq("Ali's profile has been updated"));
}

#[test]
fn given_user_deleted_when_built_then_warning() {
    let envelope =
        ActivityEnvelope::new(ActivityKind::UserDeleted).with_detail("deleted_user", "Bilal");

    let notification = build_notification(envelope, now());

    assert_that!(notification.severity, eq(Severity::Warning));
    assert_that!(notification.title.as_str(), eq("Account Deleted"));
    assert_that!(notification.message.as_str(), eq("Bilal account has been deleted"));
    assert_that!(notification.icon, eq(NotificationIcon::Trash));
}

#[test]
fn given_auto_save_with_saved_at_when_built_then_uses_it() {
    let envelope =
        ActivityEnvelope::new(ActivityKind::AutoSave).with_detail("savedAt", "14:02:11");

    let notification = build_notification(envelope, now());

    assert_that!(notification.title.as_str(), eq("Auto Save Complete"));
    assert_that!(
        notification.message.as_str(),
        eq("Data automatically saved at 14:02:11")
    );
}

#[test]
fn given_unknown_kind_when_built_then_generic_system_activity() {
    let notification = build_notification(ActivityEnvelope::new(ActivityKind::Unknown), now());

    assert_that!(notification.severity, eq(Severity::Info));
    assert_that!(notification.title.as_str(), eq("System Activity"));
    assert_that!(
        notification.message.as_str(),
        eq("New activity detected on the platform")
    );
}

#[test]
fn given_two_builds_then_ids_increase() {
    let first = build_notification(ActivityEnvelope::new(ActivityKind::UserLogin), now());
    let second = build_notification(ActivityEnvelope::new(ActivityKind::UserLogin), now());

    assert_that!(second.id, gt(first.id));
}

// =========================================================================
// Property Tests
// =========================================================================

fn any_kind() -> impl Strategy<Value = ActivityKind> {
    prop::sample::select(ActivityKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn every_kind_yields_non_empty_title_and_message(
        kind in any_kind(),
        actor in proptest::option::of("[ A-Za-z]{0,12}"),
        details in prop::collection::btree_map("[a-z_A-Z]{1,14}", "[ -~]{0,10}", 0..5),
    ) {
        let mut envelope = ActivityEnvelope::new(kind);
        envelope.actor_name = actor;
        envelope.details = details;

        let notification = build_notification(envelope, now());

        prop_assert!(!notification.title.is_empty());
        prop_assert!(!notification.message.is_empty());
        prop_assert!(!notification.read);
        prop_assert_eq!(notification.kind, kind);
    }
}
