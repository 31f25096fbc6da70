use crate::{ActivityEnvelope, ActivityKind, build_notification};

use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use serde_json::json;

// =========================================================================
// Wire Decoding
// =========================================================================

#[test]
fn given_activity_payload_when_decoded_then_fields_mapped() {
    // Given
    let payload = json!({
        "id": "5b1c",
        "type": "hospital_added",
        "user_name": "Dr. Sara Khan",
        "timestamp": "2026-03-01T09:30:00+00:00",
        "details": { "hospital_name": "City Vet", "location": "Lahore" }
    });

    // When
    let envelope: ActivityEnvelope = serde_json::from_value(payload).unwrap();

    // Then
    assert_that!(envelope.kind, eq(ActivityKind::HospitalAdded));
    assert_that!(envelope.actor(), some(eq("Dr. Sara Khan")));
    assert_that!(
        envelope.occurred_at,
        some(eq(Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()))
    );
    assert_that!(envelope.detail("hospital_name"), some(eq("City Vet")));
}

#[test]
fn given_unlisted_type_when_decoded_then_unknown_kind() {
    let envelope: ActivityEnvelope =
        serde_json::from_value(json!({ "type": "password_reset" })).unwrap();

    assert_that!(envelope.kind, eq(ActivityKind::Unknown));
}

#[test]
fn given_missing_type_when_decoded_then_unknown_kind() {
    let envelope: ActivityEnvelope = serde_json::from_value(json!({})).unwrap();

    assert_that!(envelope.kind, eq(ActivityKind::Unknown));
    assert_that!(envelope.details.is_empty(), eq(true));
}

#[test]
fn given_naive_timestamp_when_decoded_then_read_as_local_wall_time() {
    // Given
    let wall = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_micro_opt(9, 30, 0, 123456)
        .unwrap();

    // When
    let envelope: ActivityEnvelope = serde_json::from_value(json!({
        "type": "user_login",
        "timestamp": "2026-03-01T09:30:00.123456"
    }))
    .unwrap();

    // Then
    let expected = Local
        .from_local_datetime(&wall)
        .earliest()
        .unwrap()
        .with_timezone(&Utc);
    assert_that!(envelope.occurred_at, some(eq(expected)));
}

#[test]
fn given_naive_local_timestamp_ten_minutes_old_when_built_then_relative_time_matches() {
    // Given
    let now = Utc::now();
    let wall = (now.with_timezone(&Local) - Duration::minutes(10)).naive_local();
    let payload = json!({
        "type": "user_login",
        "timestamp": wall.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    });

    // When
    let envelope: ActivityEnvelope = serde_json::from_value(payload).unwrap();
    let notification = build_notification(envelope, now);

    // Then
    assert_that!(notification.relative_time.as_str(), eq("10 mins ago"));
}

#[test]
fn given_garbage_timestamp_when_decoded_then_absent() {
    let envelope: ActivityEnvelope = serde_json::from_value(json!({
        "type": "user_login",
        "timestamp": "yesterday-ish"
    }))
    .unwrap();

    assert_that!(envelope.occurred_at, none());
}

#[test]
fn given_mixed_detail_values_when_decoded_then_stringified_and_nulls_dropped() {
    let envelope: ActivityEnvelope = serde_json::from_value(json!({
        "type": "feedback_submitted",
        "details": { "target_name": "City Vet", "rating": 4, "verified": true, "comment": null }
    }))
    .unwrap();

    assert_that!(envelope.detail("rating"), some(eq("4")));
    assert_that!(envelope.detail("verified"), some(eq("true")));
    assert_that!(envelope.details.contains_key("comment"), eq(false));
}

#[test]
fn given_blank_actor_when_read_then_absent() {
    let envelope = ActivityEnvelope::new(ActivityKind::UserLogin).with_actor("   ");

    assert_that!(envelope.actor(), none());
}

#[test]
fn given_kind_strings_when_converted_then_round_trip_through_as_str() {
    for kind in ActivityKind::ALL {
        assert_eq!(ActivityKind::from(kind.as_str()), kind);
    }
    assert_eq!(ActivityKind::from("hospital_deleted"), ActivityKind::Unknown);
}
