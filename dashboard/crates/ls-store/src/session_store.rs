//! Signed-in user persistence.

use crate::error::Result as StoreResult;
use crate::keys;
use crate::preference_store::PreferenceStore;

use ls_core::{AutoSaveSnapshot, Role, Session};

use std::str::FromStr;

use log::{info, warn};
use serde_json::Value;

impl PreferenceStore {
    /// Restore the session written at sign-in.
    ///
    /// Both the user and role keys must be present and non-blank. Any role is
    /// accepted; only a user value that is not a JSON object clears both keys.
    pub fn load_session(&mut self) -> StoreResult<Option<Session>> {
        let (Some(raw_user), Some(raw_role)) =
            (self.get_raw(keys::USER), self.get_raw(keys::ROLE))
        else {
            return Ok(None);
        };

        let Ok(role) = Role::from_str(raw_role) else {
            return Ok(None);
        };

        let user = serde_json::from_str::<Value>(raw_user)
            .map_err(|e| e.to_string())
            .and_then(|user| {
                if user.is_object() {
                    Ok(user)
                } else {
                    Err(String::from("user is not a JSON object"))
                }
            });

        match user {
            Ok(user) => {
                let session = Session::new(user, role);
                info!(
                    "Restored session for {} ({})",
                    session.display_name(),
                    session.role
                );
                Ok(Some(session))
            }
            Err(reason) => {
                warn!("Discarding stored session: {reason}");
                self.local_store_mut()
                    .remove_items(&[keys::USER, keys::ROLE])?;
                Ok(None)
            }
        }
    }

    pub fn save_session(&mut self, session: &Session) -> StoreResult<()> {
        let user = serde_json::to_string(&session.user)?;
        self.local_store_mut().set_items([
            (keys::USER, user),
            (keys::ROLE, session.role.as_str().to_string()),
        ])
    }

    pub fn save_token(&mut self, token: &str) -> StoreResult<()> {
        self.set_raw(keys::TOKEN, token)
    }

    pub fn token(&self) -> Option<&str> {
        self.get_raw(keys::TOKEN).filter(|token| !token.is_empty())
    }

    /// Sign-out: forget user, role and token.
    pub fn clear_session(&mut self) -> StoreResult<()> {
        self.local_store_mut()
            .remove_items(&[keys::USER, keys::ROLE, keys::TOKEN])
    }

    pub fn save_snapshot(&mut self, snapshot: &AutoSaveSnapshot) -> StoreResult<()> {
        self.set(keys::AUTO_SAVE_DATA, snapshot)
    }

    pub fn last_snapshot(&self) -> Option<AutoSaveSnapshot> {
        self.get(keys::AUTO_SAVE_DATA)
    }
}
