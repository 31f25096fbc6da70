use ls_core::{ActiveView, NotificationId, PreferenceChange, Preferences, Session};
use ls_realtime::ListenerEvent;

/// Everything the shell reacts to, processed one at a time in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    Listener(ListenerEvent),
    AutoSaveTick,
    Command(ShellCommand),
}

/// Requests from the host (settings panel, navbar, navigation).
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Single toggle from the settings panel
    SetPreference(PreferenceChange),
    /// Explicit "Save settings"
    SaveSettings(Preferences),
    /// "Reset to Default": default settings, light theme
    ResetSettings,
    /// The server accepted the two-factor setup; only now is the flag set
    TwoFactorConfirmed,
    Navigate(ActiveView),
    MarkRead(NotificationId),
    MarkAllRead,
    ClearNotifications,
    SignIn { session: Session, token: String },
    SignOut,
}

impl From<ListenerEvent> for ShellEvent {
    fn from(event: ListenerEvent) -> Self {
        Self::Listener(event)
    }
}

impl From<ShellCommand> for ShellEvent {
    fn from(command: ShellCommand) -> Self {
        Self::Command(command)
    }
}
