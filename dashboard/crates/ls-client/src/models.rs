//! Request and response bodies with a fixed shape.
//!
//! Everything else travels as plain [`serde_json::Value`] objects.

use ls_core::{Preferences, Role, Session, Theme};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hospital create/update body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HospitalRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctors: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Slaughterhouse create/update body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlaughterhouseRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRequest {
    pub user_id: String,
    pub user_name: String,
    pub target_type: String,
    pub target_id: String,
    pub target_name: String,
    pub rating: u8,
    pub comment: String,
}

/// Successful `/api/auth/login` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user: Value,
    #[serde(default)]
    pub settings: Option<RemoteSettings>,
}

impl LoginResponse {
    /// Session to persist, if the server sent a non-blank role.
    pub fn session(&self) -> Option<Session> {
        let role = self
            .user
            .get("role")
            .and_then(Value::as_str)
            .and_then(|role| Role::from_str(role).ok())?;
        Some(Session::new(self.user.clone(), role))
    }
}

/// Settings as the server stores them (snake_case keys).
///
/// Missing fields take the local defaults; an unknown theme falls back to
/// the default theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    pub theme: String,
    pub language: String,
    pub notifications: bool,
    pub sounds: bool,
    pub auto_save: bool,
    pub two_factor_auth: bool,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self::from(&Preferences::default())
    }
}

impl From<&Preferences> for RemoteSettings {
    fn from(prefs: &Preferences) -> Self {
        Self {
            theme: prefs.theme.as_str().to_string(),
            language: prefs.language.clone(),
            notifications: prefs.notifications_enabled,
            sounds: prefs.sounds_enabled,
            auto_save: prefs.auto_save_enabled,
            two_factor_auth: prefs.two_factor_enabled,
        }
    }
}

impl From<RemoteSettings> for Preferences {
    fn from(remote: RemoteSettings) -> Self {
        Self {
            theme: Theme::from_str(&remote.theme).unwrap_or_default(),
            language: remote.language,
            notifications_enabled: remote.notifications,
            sounds_enabled: remote.sounds,
            auto_save_enabled: remote.auto_save,
            two_factor_enabled: remote.two_factor_auth,
        }
    }
}

/// Body of both two-factor routes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoFactorRequest<'a> {
    pub user_id: &'a str,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<&'a str>,
}

/// Answer from the two-factor routes. The secret and provisioning URI are
/// only sent when 2FA is switched on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TwoFactorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub provisioning_uri: Option<String>,
}
