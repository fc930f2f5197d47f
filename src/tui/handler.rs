//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::settings::Mode;

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::views::analyzer::FormField;
use super::views::faq::FaqViewState;
use crate::models::FAQ_ENTRIES;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Any key closes help
    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    match key.code {
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::F(2) => {
            app.switch_mode(Mode::Analyzer);
            return Ok(());
        }
        KeyCode::F(3) => {
            app.switch_mode(Mode::Faq);
            return Ok(());
        }
        KeyCode::Char('q') if !ctrl && !app.is_capturing_text() => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') if !app.is_capturing_text() => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        _ => {}
    }

    match app.mode {
        Mode::Analyzer => handle_analyzer_key(app, key),
        Mode::Faq => handle_faq_key(&mut app.faq, key),
    }
    Ok(())
}

/// Keys for the analyzer form
fn handle_analyzer_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('g') if ctrl => {
            app.generate_analysis();
            return;
        }
        KeyCode::Char('r') if ctrl => {
            app.form.clear_amounts();
            app.recompute();
            app.set_status("Amounts cleared");
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus_next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus_prev();
            return;
        }
        KeyCode::Enter => {
            if app.form.focus == FormField::Generate {
                app.generate_analysis();
            } else {
                app.form.focus_next();
            }
            return;
        }
        _ => {}
    }

    if app.form.focus == FormField::Currency {
        match key.code {
            KeyCode::Left => {
                app.form.cycle_currency(false);
                app.recompute();
                return;
            }
            KeyCode::Right => {
                app.form.cycle_currency(true);
                app.recompute();
                return;
            }
            _ => {}
        }
    }

    let Some(input) = app.form.focused_input_mut() else {
        return;
    };

    let changed = match key.code {
        KeyCode::Char('u') if ctrl => {
            let had_text = !input.value().is_empty();
            input.clear();
            had_text
        }
        KeyCode::Char(c) if !ctrl => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    };

    if changed {
        app.recompute();
    }
}

/// Keys for the FAQ list
fn handle_faq_key(faq: &mut FaqViewState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => faq.move_down(FAQ_ENTRIES.len()),
        KeyCode::Char('k') | KeyCode::Up => faq.move_up(),
        KeyCode::Enter => faq.select(),
        KeyCode::Backspace | KeyCode::Esc => faq.clear_selection(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{CurrencySymbol, Money};

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        )
        .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_recomputes() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        type_text(&mut app, "5000");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "-2000");

        let (input, result) = app.budget.as_ref().unwrap();
        assert_eq!(input.income, Money::from_units(5000));
        assert_eq!(input.expenses, Money::from_units(2000));
        assert_eq!(result.remaining, Money::from_units(3000));
        assert_eq!(app.form.income.value(), "5000.00");
    }

    #[test]
    fn test_enter_on_button_generates() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "40");

        while app.form.focus != FormField::Generate {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.analysis.is_some());

        // Editing discards the charts
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('1'));
        assert!(app.analysis.is_none());

        ctrl(&mut app, 'g');
        assert!(app.analysis.is_some());
    }

    #[test]
    fn test_currency_cycle_and_custom_symbol() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.form.focus, FormField::Currency);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.budget.as_ref().unwrap().0.currency, CurrencySymbol::Dollar);

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert!(app.is_capturing_text());

        // 'q' is typed, not a quit
        type_text(&mut app, "qar");
        assert!(!app.should_quit);
        assert_eq!(
            app.budget.as_ref().unwrap().0.currency,
            CurrencySymbol::Other("qar".into())
        );
    }

    #[test]
    fn test_q_quits_outside_text() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.has_dialog());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_faq_navigation() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.mode, Mode::Faq);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        let entry = app.faq.selected_entry(FAQ_ENTRIES).unwrap();
        assert_eq!(entry.question, "What is debt?");

        press(&mut app, KeyCode::Backspace);
        assert!(app.faq.selected.is_none());
    }

    #[test]
    fn test_ctrl_r_resets_amounts() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_text(&mut app, "900");
        ctrl(&mut app, 'r');
        assert!(app.form.income.value().is_empty());
        assert_eq!(app.budget.as_ref().unwrap().0.income, Money::zero());
    }

    #[test]
    fn test_tick_expires_notifications() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.notifications.push(
            crate::tui::widgets::Notification::info("gone")
                .with_duration(std::time::Duration::ZERO),
        );
        handle_event(&mut app, Event::Tick).unwrap();
        assert!(app.notifications.is_empty());
    }
}
