use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_AUTO_SAVE_INTERVAL_MS: u64 = 1_000;
pub const MAX_AUTO_SAVE_INTERVAL_MS: u64 = 3_600_000;
pub const DEFAULT_AUTO_SAVE_INTERVAL_MS: u64 = 30_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AutoSaveConfig {
    pub interval_ms: u64,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_AUTO_SAVE_INTERVAL_MS,
        }
    }
}

impl AutoSaveConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_ms < MIN_AUTO_SAVE_INTERVAL_MS
            || self.interval_ms > MAX_AUTO_SAVE_INTERVAL_MS
        {
            return Err(ConfigError::auto_save(format!(
                "auto_save.interval_ms must be {}-{}, got {}",
                MIN_AUTO_SAVE_INTERVAL_MS, MAX_AUTO_SAVE_INTERVAL_MS, self.interval_ms
            )));
        }

        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
