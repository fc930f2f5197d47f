//! Toast notification widget
//!
//! Displays temporary notifications to the user.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::models::{Notice, NoticeLevel};

/// Border color for a notice level
pub fn level_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::Blue,
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub notice: Notice,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(notice: Notice) -> Self {
        Self {
            notice,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Notice::info(message))
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Notice::success(message))
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Notice::warning(message))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Notice::error(message))
    }

    /// Set how long this notification stays on screen
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn level(&self) -> NoticeLevel {
        self.notice.level
    }

    pub fn message(&self) -> &str {
        &self.notice.message
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

impl From<Notice> for Notification {
    fn from(notice: Notice) -> Self {
        Self::new(notice)
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let level = self.notification.level();
        let color = level_color(level);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", level.icon(), level.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue
    pub fn push(&mut self, notification: impl Into<Notification>) {
        self.notifications.push(notification.into());
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The notification currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::warning("Careful");
        assert_eq!(n.message(), "Careful");
        assert_eq!(n.level(), NoticeLevel::Warning);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(level_color(NoticeLevel::Info), Color::Blue);
        assert_eq!(level_color(NoticeLevel::Error), Color::Red);
    }

    #[test]
    fn test_queue_expiry() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("stays"));
        queue.push(Notification::error("gone").with_duration(Duration::ZERO));
        queue.push(Notice::success("from a notice"));
        assert_eq!(queue.len(), 3);

        queue.remove_expired();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message(), "stays");
    }
}
