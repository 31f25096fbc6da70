use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Navigation tab currently shown by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Dashboard,
    Users,
    Hospitals,
    Slaughterhouses,
    Feedback,
    Portal,
    Profile,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::Hospitals => "hospitals",
            Self::Slaughterhouses => "slaughterhouses",
            Self::Feedback => "feedback",
            Self::Portal => "portal",
            Self::Profile => "profile",
        }
    }
}

impl FromStr for ActiveView {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "dashboard" => Ok(Self::Dashboard),
            "users" => Ok(Self::Users),
            "hospitals" => Ok(Self::Hospitals),
            "slaughterhouses" => Ok(Self::Slaughterhouses),
            "feedback" => Ok(Self::Feedback),
            "portal" => Ok(Self::Portal),
            "profile" => Ok(Self::Profile),
            _ => Err(CoreError::invalid_view(s)),
        }
    }
}

impl std::fmt::Display for ActiveView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
