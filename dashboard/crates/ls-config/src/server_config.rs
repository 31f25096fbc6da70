use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_WEBSOCKET_PATH};

use std::time::Duration;

use serde::Deserialize;

// Request timeout constraints (seconds)
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Where the LivestockSync backend lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// REST base URL, e.g. `http://localhost:8000`
    pub api_base_url: String,
    /// Path of the dashboard stream, joined to the base URL host
    pub websocket_path: String,
    /// Full stream URL; overrides the derived one when set
    pub websocket_url: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            websocket_path: String::from(DEFAULT_WEBSOCKET_PATH),
            websocket_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Plain `http://` / `ws://` only: neither the REST client nor the
    /// stream client is built with a TLS stack.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.api_base_url.starts_with("http://") {
            return Err(ConfigError::server(format!(
                "server.api_base_url must start with http:// (TLS is not supported), got '{}'",
                self.api_base_url
            )));
        }

        if let Some(url) = &self.websocket_url
            && !url.starts_with("ws://")
        {
            return Err(ConfigError::server(format!(
                "server.websocket_url must start with ws:// (TLS is not supported), got '{url}'"
            )));
        }

        if !self.websocket_path.starts_with('/') {
            return Err(ConfigError::server(format!(
                "server.websocket_path must start with '/', got '{}'",
                self.websocket_path
            )));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::server(format!(
                "server.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    /// Stream endpoint: the explicit `websocket_url`, or the base URL with
    /// `http` swapped for `ws` plus `websocket_path`.
    pub fn websocket_url(&self) -> String {
        if let Some(url) = &self.websocket_url {
            return url.clone();
        }

        let base = self.api_base_url.trim_end_matches('/');
        let host = match base.strip_prefix("http://") {
            Some(rest) => format!("ws://{rest}"),
            None => base.to_string(),
        };

        format!("{host}{}", self.websocket_path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
