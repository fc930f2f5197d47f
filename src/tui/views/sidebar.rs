//! Sidebar view
//!
//! Shows the title, mode switcher and the active settings

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::config::settings::Mode;
use crate::tui::app::App;
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_modes(frame, app, layout.modes);
    render_info(frame, app, layout.info);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Pocketbook ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(vec![
        Line::from("Budget analyzer"),
        Line::from(format!("v{}", env!("CARGO_PKG_VERSION"))),
    ])
    .block(block)
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(text, area);
}

fn render_modes(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Mode ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let items: Vec<ListItem> = Mode::ALL
        .iter()
        .zip(["F2", "F3"])
        .map(|(mode, key)| {
            let style = if *mode == app.mode {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", key), Style::default().fg(Color::Yellow)),
                Span::styled(mode.title(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_info(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![
            Span::styled("Currency: ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.settings.currency_symbol.symbol().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Opens in: ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.settings.default_mode.title()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Amounts are never saved.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
