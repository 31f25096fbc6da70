use crate::{ActiveView, Role};

use serde_json::Value;

/// Signed-in user restored from local storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// User object as returned by the login endpoint
    pub user: Value,
    pub role: Role,
}

impl Session {
    pub fn new(user: Value, role: Role) -> Self {
        Self { user, role }
    }

    pub fn landing_view(&self) -> ActiveView {
        self.role.landing_view()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user
            .get("id")
            .or_else(|| self.user.get("uid"))
            .and_then(Value::as_str)
    }

    pub fn display_name(&self) -> &str {
        ["full_name", "name", "email"]
            .iter()
            .find_map(|key| self.user.get(*key).and_then(Value::as_str))
            .unwrap_or("User")
    }
}
