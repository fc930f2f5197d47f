//! Help dialog
//!
//! Shows the global keys followed by the keys of the current mode

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::settings::Mode;
use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.mode))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn mode_context(mode: Mode) -> KeyContext {
    match mode {
        Mode::Analyzer => KeyContext::Analyzer,
        Mode::Faq => KeyContext::Faq,
    }
}

/// Help lines for a mode
pub fn help_lines(mode: Mode) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for context in [KeyContext::Global, mode_context(mode)] {
        lines.push(Line::from(Span::styled(
            context.title(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
        for binding in get_keybindings(context) {
            lines.push(key_line(&format_keybinding(binding), binding.description));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_help_follows_mode() {
        let analyzer = text(&help_lines(Mode::Analyzer));
        assert!(analyzer.contains("Generate analysis"));
        assert!(!analyzer.contains("Show answer"));

        let faq = text(&help_lines(Mode::Faq));
        assert!(faq.contains("Show answer"));
        assert!(faq.contains("Quit"));
    }
}
