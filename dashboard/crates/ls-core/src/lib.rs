pub mod error;
pub mod models;
pub mod notifications;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::active_view::ActiveView;
pub use models::activity_envelope::ActivityEnvelope;
pub use models::activity_kind::ActivityKind;
pub use models::auto_save_snapshot::AutoSaveSnapshot;
pub use models::display_notification::DisplayNotification;
pub use models::notification_icon::NotificationIcon;
pub use models::notification_id::NotificationId;
pub use models::preferences::{PreferenceChange, Preferences};
pub use models::role::Role;
pub use models::session::Session;
pub use models::severity::Severity;
pub use models::theme::Theme;
pub use notifications::builder::build_notification;
pub use notifications::notification_list::{NOTIFICATION_CAPACITY, NotificationList};
pub use notifications::relative_time::format_relative_time;
