//! Finance FAQ view
//!
//! A question list and an answer panel. Nothing is selected until the user
//! presses Enter on a question.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::FaqEntry;
use crate::services::FaqService;
use crate::tui::app::App;
use crate::tui::layout::FaqLayout;

/// Cursor and selection in the question list
#[derive(Debug, Clone, Default)]
pub struct FaqViewState {
    /// Highlighted row
    pub list_state: ListState,
    /// Question whose answer is shown
    pub selected: Option<usize>,
}

impl FaqViewState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
            selected: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = (self.cursor() + 1).min(len - 1);
        self.list_state.select(Some(next));
    }

    pub fn move_up(&mut self) {
        let prev = self.cursor().saturating_sub(1);
        self.list_state.select(Some(prev));
    }

    /// Select the highlighted question
    pub fn select(&mut self) {
        self.selected = Some(self.cursor());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected entry, if any
    pub fn selected_entry<'a>(&self, entries: &'a [FaqEntry]) -> Option<&'a FaqEntry> {
        self.selected.and_then(|i| entries.get(i))
    }
}

/// Render the FAQ view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = FaqLayout::new(area);
    let faq = FaqService::new();
    let selected = app.faq.selected;

    let items: Vec<ListItem> = faq
        .questions()
        .enumerate()
        .map(|(i, question)| {
            let marker = if Some(i) == selected { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(question),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Finance FAQ ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, layout.questions, &mut app.faq.list_state);

    let lines = match app.faq.selected_entry(faq.entries()) {
        Some(entry) => {
            let answer = faq.lookup(entry.question).unwrap_or("No answer found.");
            vec![
                Line::from(Span::styled(
                    entry.question,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(answer),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Select a question and press Enter to see the answer.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let answer = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Answer ").borders(Borders::ALL));
    frame.render_widget(answer, layout.answer);
}
