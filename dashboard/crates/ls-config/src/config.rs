use crate::{
    AutoSaveConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, RealtimeConfig, ServerConfig, StorageConfig, ThemeConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub realtime: RealtimeConfig,
    pub auto_save: AutoSaveConfig,
    pub storage: StorageConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for LS_CONFIG_DIR env var, else use ./.livestocksync/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply LS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: LS_CONFIG_DIR env var > ./.livestocksync/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.realtime.validate()?;
        self.auto_save.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Absolute path of the preference file.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.file))
    }

    /// Absolute path of the log file, when logging to a file.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file)))
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {} (stream {}, timeout {}s)",
            self.server.api_base_url,
            self.server.websocket_url(),
            self.server.request_timeout_secs
        );
        info!(
            "  realtime: reconnect={}ms, buffer={}",
            self.realtime.reconnect_delay_ms, self.realtime.event_buffer_size
        );
        info!("  auto_save: every {}ms", self.auto_save.interval_ms);
        info!("  storage: {}", self.storage.file);
        info!("  theme: os_prefers_dark={}", self.theme.os_prefers_dark);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("LS_API_BASE_URL", &mut self.server.api_base_url);
        Self::apply_env_string("LS_WEBSOCKET_PATH", &mut self.server.websocket_path);
        Self::apply_env_option_string("LS_WEBSOCKET_URL", &mut self.server.websocket_url);
        Self::apply_env_parse(
            "LS_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );

        // Realtime
        Self::apply_env_parse(
            "LS_RECONNECT_DELAY_MS",
            &mut self.realtime.reconnect_delay_ms,
        );
        Self::apply_env_parse(
            "LS_EVENT_BUFFER_SIZE",
            &mut self.realtime.event_buffer_size,
        );

        // Auto-save
        Self::apply_env_parse("LS_AUTO_SAVE_INTERVAL_MS", &mut self.auto_save.interval_ms);

        // Storage
        Self::apply_env_string("LS_STORAGE_FILE", &mut self.storage.file);

        // Theme
        Self::apply_env_bool("LS_OS_PREFERS_DARK", &mut self.theme.os_prefers_dark);

        // Logging
        Self::apply_env_parse("LS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LS_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
