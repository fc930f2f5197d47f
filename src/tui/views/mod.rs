//! TUI Views module
//!
//! The analyzer and FAQ views, plus the sidebar and status bar.

pub mod analyzer;
pub mod faq;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use crate::config::settings::Mode;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{notification_area, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.mode {
        Mode::Analyzer => analyzer::render(frame, app, layout.main),
        Mode::Faq => faq::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(layout.main),
        );
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
