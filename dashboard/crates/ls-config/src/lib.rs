mod auto_save_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod realtime_config;
mod server_config;
mod storage_config;
mod theme_config;

#[cfg(test)]
mod tests;

pub use auto_save_config::AutoSaveConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use realtime_config::RealtimeConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;
pub use theme_config::ThemeConfig;

pub const CONFIG_DIR_ENV: &str = "LS_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".livestocksync";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_WEBSOCKET_PATH: &str = "/ws/dashboard";
const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
