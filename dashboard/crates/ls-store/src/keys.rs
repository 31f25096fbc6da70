//! Durable keys shared with the web dashboard's local storage.

pub const THEME: &str = "theme";
/// Older key still written alongside `theme`
pub const LEGACY_THEME: &str = "livestocksync_theme";
pub const USER: &str = "livestocksync_user";
pub const ROLE: &str = "livestocksync_role";
pub const TOKEN: &str = "livestocksync_token";
pub const APP_SETTINGS: &str = "appSettings";
pub const AUTO_SAVE_DATA: &str = "autoSaveData";
