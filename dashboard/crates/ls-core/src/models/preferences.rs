use crate::Theme;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_LANGUAGE: &str = "english";

/// User-facing settings persisted under the `appSettings` key.
///
/// Field names on the wire match what the web dashboard has always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub language: String,
    #[serde(rename = "notifications")]
    pub notifications_enabled: bool,
    #[serde(rename = "sounds")]
    pub sounds_enabled: bool,
    #[serde(rename = "autoSave")]
    pub auto_save_enabled: bool,
    #[serde(rename = "twoFactorAuth")]
    pub two_factor_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            language: String::from(DEFAULT_LANGUAGE),
            notifications_enabled: true,
            sounds_enabled: true,
            auto_save_enabled: true,
            two_factor_enabled: false,
        }
    }
}

impl Preferences {
    /// Overlay a persisted (possibly partial) settings object.
    ///
    /// Each field is taken only if present with the right type. An unknown
    /// theme string is discarded and the current theme kept.
    pub fn merge_json(&mut self, persisted: &Value) {
        let Some(object) = persisted.as_object() else {
            return;
        };

        if let Some(theme) = object
            .get("theme")
            .and_then(Value::as_str)
            .and_then(|s| Theme::from_str(s).ok())
        {
            self.theme = theme;
        }

        if let Some(language) = object.get("language").and_then(Value::as_str) {
            self.language = language.to_string();
        }

        let flags: [(&str, &mut bool); 4] = [
            ("notifications", &mut self.notifications_enabled),
            ("sounds", &mut self.sounds_enabled),
            ("autoSave", &mut self.auto_save_enabled),
            ("twoFactorAuth", &mut self.two_factor_enabled),
        ];
        for (key, target) in flags {
            if let Some(value) = object.get(key).and_then(Value::as_bool) {
                *target = value;
            }
        }
    }

    pub fn apply(&mut self, change: &PreferenceChange) {
        match change {
            PreferenceChange::Theme(theme) => self.theme = *theme,
            PreferenceChange::Language(language) => self.language = language.clone(),
            PreferenceChange::Notifications(on) => self.notifications_enabled = *on,
            PreferenceChange::Sounds(on) => self.sounds_enabled = *on,
            PreferenceChange::AutoSave(on) => self.auto_save_enabled = *on,
            PreferenceChange::TwoFactor(on) => self.two_factor_enabled = *on,
        }
    }
}

/// A single settings toggle made by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceChange {
    Theme(Theme),
    Language(String),
    Notifications(bool),
    Sounds(bool),
    AutoSave(bool),
    TwoFactor(bool),
}
