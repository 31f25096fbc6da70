use crate::format_relative_time;

use chrono::{DateTime, Duration, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn ago(delta: Duration) -> String {
    format_relative_time(now() - delta, now())
}

#[test]
fn test_under_a_minute_is_just_now() {
    assert_eq!(ago(Duration::zero()), "Just now");
    assert_eq!(ago(Duration::seconds(59)), "Just now");
}

#[test]
fn test_minutes() {
    assert_eq!(ago(Duration::minutes(1)), "1 min ago");
    assert_eq!(ago(Duration::minutes(5)), "5 mins ago");
    assert_eq!(ago(Duration::minutes(59)), "59 mins ago");
}

#[test]
fn test_hours() {
    assert_eq!(ago(Duration::minutes(60)), "1 hour ago");
    assert_eq!(ago(Duration::hours(23)), "23 hours ago");
}

#[test]
fn test_days() {
    assert_eq!(ago(Duration::hours(24)), "1 day ago");
    assert_eq!(ago(Duration::days(3)), "3 days ago");
}

#[test]
fn test_future_timestamp_is_just_now() {
    assert_eq!(format_relative_time(now() + Duration::hours(1), now()), "Just now");
}
