use chrono::{DateTime, Utc};

/// "Just now", "5 mins ago", "1 hour ago", "3 days ago".
///
/// Timestamps in the future render as "Just now".
pub fn format_relative_time(occurred_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(occurred_at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        String::from("Just now")
    } else if minutes < 60 {
        format!("{} ago", plural(minutes, "min"))
    } else if hours < 24 {
        format!("{} ago", plural(hours, "hour"))
    } else {
        format!("{} ago", plural(days, "day"))
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
