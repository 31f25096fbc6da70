use serde::Deserialize;

/// Initial OS colour-scheme reading, until the host reports a change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub os_prefers_dark: bool,
}
