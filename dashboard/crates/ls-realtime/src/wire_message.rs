use crate::error::Result as RealtimeResult;

use ls_core::ActivityEnvelope;

use serde::Deserialize;
use serde_json::Value;

const ACTIVITY: &str = "activity";
const INITIAL_DATA: &str = "initial_data";

/// `{ "type": ..., "data": ... }` text frame from `/ws/dashboard`.
#[derive(Debug, Deserialize)]
struct Frame {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

/// A decoded frame.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    Activity(ActivityEnvelope),
    InitialData(Value),
    /// Accepted but unused (`heartbeat`, `activities`, anything new)
    Ignored(String),
}

impl InboundMessage {
    /// Fails when the frame is not JSON, has no string `type`, or an
    /// `activity` frame's `data` is not an object.
    pub fn parse(text: &str) -> RealtimeResult<Self> {
        let frame: Frame = serde_json::from_str(text)?;

        let message = match frame.kind.as_str() {
            ACTIVITY => Self::Activity(serde_json::from_value(frame.data)?),
            INITIAL_DATA => Self::InitialData(frame.data),
            _ => Self::Ignored(frame.kind),
        };

        Ok(message)
    }
}
