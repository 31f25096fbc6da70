use crate::ConnectionState;

use ls_core::ActivityEnvelope;

use serde_json::Value;

/// What the listener forwards to its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum ListenerEvent {
    Activity(ActivityEnvelope),
    /// `initial_data` payload sent by the server right after connecting
    Snapshot(Value),
    StateChanged(ConnectionState),
}
