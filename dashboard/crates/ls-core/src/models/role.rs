use crate::{ActiveView, CoreError, Result as CoreErrorResult};

use std::str::FromStr;

/// Account role; decides which shell the user lands in.
///
/// Roles this dashboard has no dedicated view for (legacy `farmer` accounts,
/// roles added server-side later) are kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Hospital,
    Veterinarian,
    Slaughterhouse,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Hospital => "hospital",
            Self::Veterinarian => "veterinarian",
            Self::Slaughterhouse => "slaughterhouse",
            Self::Other(name) => name,
        }
    }

    /// Admins get the management dashboard, everyone else their portal.
    pub fn landing_view(&self) -> ActiveView {
        match self {
            Self::Admin => ActiveView::Dashboard,
            _ => ActiveView::Portal,
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Only a blank role is rejected.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim() {
            "" => Err(CoreError::invalid_role(s)),
            "admin" => Ok(Self::Admin),
            "hospital" => Ok(Self::Hospital),
            "veterinarian" => Ok(Self::Veterinarian),
            "slaughterhouse" => Ok(Self::Slaughterhouse),
            other => Ok(Self::Other(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
