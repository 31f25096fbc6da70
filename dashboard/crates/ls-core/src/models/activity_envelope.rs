use crate::ActivityKind;

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Inbound record describing something that happened on the platform.
///
/// Wire shape (the `data` of an `activity` message):
/// `{ "type": "hospital_added", "user_name": "...", "timestamp": "...", "details": {...} }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityEnvelope {
    #[serde(rename = "type", default)]
    pub kind: ActivityKind,

    #[serde(rename = "user_name", default, skip_serializing_if = "Option::is_none")]
    pub actor_name: Option<String>,

    #[serde(
        rename = "timestamp",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub occurred_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "stringified_details")]
    pub details: BTreeMap<String, String>,
}

impl ActivityEnvelope {
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_actor(mut self, name: impl Into<String>) -> Self {
        self.actor_name = Some(name.into());
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn occurred_at(mut self, at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(at);
        self
    }

    /// Detail value, treating empty strings as absent.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Actor name, treating empty strings as absent.
    pub fn actor(&self) -> Option<&str> {
        self.actor_name
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}

/// Accepts RFC 3339 or naive ISO-8601. Naive values are host-local wall time,
/// which is what the backend's `datetime.now().isoformat()` emits. Anything else
/// is dropped.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::String(text)) = raw else {
        return Ok(None);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&text) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    Ok(NaiveDateTime::parse_from_str(&text, NAIVE_TIMESTAMP_FORMAT)
        .ok()
        .and_then(local_to_utc))
}

/// Ambiguous wall times (DST fall-back) resolve to the earlier instant.
/// Times skipped by a DST jump have no instant and are dropped.
fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// The backend mixes strings with numbers (ratings) and nulls in `details`.
fn stringified_details<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(map)) = raw else {
        return Ok(BTreeMap::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect())
}
