use crate::ActiveView;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal UI state written under `autoSaveData` on every auto-save tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoSaveSnapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "activeTab")]
    pub active_view: ActiveView,
    /// Epoch milliseconds
    pub last_saved: i64,
}

impl AutoSaveSnapshot {
    pub fn capture(active_view: ActiveView, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now,
            active_view,
            last_saved: now.timestamp_millis(),
        }
    }
}
