//! Reusable widgets for the TUI

pub mod input;
pub mod notification;

pub use input::{InputKind, TextInput};
pub use notification::{level_color, Notification, NotificationQueue, NotificationWidget};
