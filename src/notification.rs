//! Notification module for autosuggest
//!
//! Transient toasts for config warnings, word list status and loader failures.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
