pub mod active_view;
pub mod activity_envelope;
pub mod activity_kind;
pub mod auto_save_snapshot;
pub mod display_notification;
pub mod notification_icon;
pub mod notification_id;
pub mod preferences;
pub mod role;
pub mod session;
pub mod severity;
pub mod theme;
