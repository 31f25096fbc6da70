use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Reconnect delay constraints (milliseconds)
pub const MIN_RECONNECT_DELAY_MS: u64 = 100;
pub const MAX_RECONNECT_DELAY_MS: u64 = 60_000;
pub const DEFAULT_RECONNECT_DELAY_MS: u64 = 3_000;

// Listener → shell event buffer
pub const MIN_EVENT_BUFFER_SIZE: usize = 1;
pub const MAX_EVENT_BUFFER_SIZE: usize = 10_000;
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 256;

/// Realtime stream settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RealtimeConfig {
    /// Fixed delay before reconnecting after a close
    pub reconnect_delay_ms: u64,
    pub event_buffer_size: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            reconnect_delay_ms: DEFAULT_RECONNECT_DELAY_MS,
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
        }
    }
}

impl RealtimeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.reconnect_delay_ms < MIN_RECONNECT_DELAY_MS
            || self.reconnect_delay_ms > MAX_RECONNECT_DELAY_MS
        {
            return Err(ConfigError::realtime(format!(
                "realtime.reconnect_delay_ms must be {}-{}, got {}",
                MIN_RECONNECT_DELAY_MS, MAX_RECONNECT_DELAY_MS, self.reconnect_delay_ms
            )));
        }

        if self.event_buffer_size < MIN_EVENT_BUFFER_SIZE
            || self.event_buffer_size > MAX_EVENT_BUFFER_SIZE
        {
            return Err(ConfigError::realtime(format!(
                "realtime.event_buffer_size must be {}-{}, got {}",
                MIN_EVENT_BUFFER_SIZE, MAX_EVENT_BUFFER_SIZE, self.event_buffer_size
            )));
        }

        Ok(())
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}
