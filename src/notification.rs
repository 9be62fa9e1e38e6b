//! Notification module for typeahead
//!
//! Displays transient messages on top of the UI: where a commit navigated
//! to, or a warning about the config file.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
