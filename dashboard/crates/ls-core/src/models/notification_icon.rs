use crate::{ActivityKind, Severity};

use serde::{Deserialize, Serialize};

/// Icon hint for rendering a notification in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationIcon {
    UserPlus,
    Building,
    Package,
    Edit,
    Trash,
    Save,
    CheckCircle,
    AlertCircle,
    Info,
}

impl NotificationIcon {
    /// Activity-specific icon, falling back to the severity icon.
    pub fn for_activity(kind: ActivityKind, severity: Severity) -> Self {
        match kind {
            ActivityKind::UserRegistered => Self::UserPlus,
            ActivityKind::HospitalAdded => Self::Building,
            ActivityKind::SlaughterhouseAdded => Self::Package,
            ActivityKind::UserUpdated => Self::Edit,
            ActivityKind::UserDeleted => Self::Trash,
            ActivityKind::AutoSave => Self::Save,
            _ => match severity {
                Severity::Success => Self::CheckCircle,
                Severity::Warning => Self::AlertCircle,
                Severity::Info => Self::Info,
            },
        }
    }
}
