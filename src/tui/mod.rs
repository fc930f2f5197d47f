//! Terminal User Interface module
//!
//! An interactive budget analyzer and finance FAQ built on ratatui. The
//! analyzer recomputes the budget on every keystroke; charts are drawn on
//! demand.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
