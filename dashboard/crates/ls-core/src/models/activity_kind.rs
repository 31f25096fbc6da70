use serde::{Deserialize, Serialize};

/// Platform activity reported on the dashboard event channel.
///
/// Anything the backend emits that is not listed here decodes as
/// [`ActivityKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    UserRegistered,
    UserLogin,
    HospitalAdded,
    SlaughterhouseAdded,
    FeedbackSubmitted,
    UserUpdated,
    UserDeleted,
    AutoSave,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 9] = [
        Self::UserRegistered,
        Self::UserLogin,
        Self::HospitalAdded,
        Self::SlaughterhouseAdded,
        Self::FeedbackSubmitted,
        Self::UserUpdated,
        Self::UserDeleted,
        Self::AutoSave,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserRegistered => "user_registered",
            Self::UserLogin => "user_login",
            Self::HospitalAdded => "hospital_added",
            Self::SlaughterhouseAdded => "slaughterhouse_added",
            Self::FeedbackSubmitted => "feedback_submitted",
            Self::UserUpdated => "user_updated",
            Self::UserDeleted => "user_deleted",
            Self::AutoSave => "auto_save",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for ActivityKind {
    fn from(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .unwrap_or(Self::Unknown)
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
