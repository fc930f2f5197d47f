//! Budget analyzer view
//!
//! The input form, the status banner and the two charts. The form state lives
//! here too; [`App`] owns one and recomputes the budget after every edit.

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::error::PocketbookResult;
use crate::models::currency::{DEFAULT_SYMBOL, MAX_SYMBOL_LEN};
use crate::models::{BreakdownCategory, BreakdownEntry, BudgetInput, CurrencySymbol, Money, Notice};
use crate::reports::analysis::{NO_DISTRIBUTION_MESSAGE, NO_OUTFLOWS_MESSAGE};
use crate::reports::{AnalysisReport, ChartSlice};
use crate::services::BudgetCalculator;
use crate::tui::app::App;
use crate::tui::layout::{chart_panels, AnalyzerLayout};
use crate::tui::widgets::{level_color, TextInput};

/// Index of the "Other" entry in the currency selector
pub const OTHER_CHOICE: usize = CurrencySymbol::PRESETS.len();

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Currency,
    Income,
    Expenses,
    Savings,
    Investments,
    Generate,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Currency,
        FormField::Income,
        FormField::Expenses,
        FormField::Savings,
        FormField::Investments,
        FormField::Generate,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Currency => "Currency",
            Self::Income => "Income",
            Self::Expenses => "Expenses",
            Self::Savings => "Savings",
            Self::Investments => "Investments",
            Self::Generate => "Generate Analysis",
        }
    }

    pub fn is_amount(self) -> bool {
        matches!(
            self,
            Self::Income | Self::Expenses | Self::Savings | Self::Investments
        )
    }
}

/// State of the analyzer input form
#[derive(Debug, Clone)]
pub struct AnalyzerFormState {
    pub focus: FormField,
    /// Selected currency: an index into the presets, or [`OTHER_CHOICE`]
    pub currency_choice: usize,
    pub custom_currency: TextInput,
    pub income: TextInput,
    pub expenses: TextInput,
    pub savings: TextInput,
    pub investments: TextInput,
}

fn amount_input(field: FormField) -> TextInput {
    TextInput::amount(format!("{:<11}", field.label()))
}

impl AnalyzerFormState {
    /// Empty form with `currency` preselected
    pub fn new(currency: &CurrencySymbol) -> Self {
        let mut custom_currency = TextInput::new()
            .label("Symbol")
            .placeholder(DEFAULT_SYMBOL)
            .max_len(MAX_SYMBOL_LEN);

        let currency_choice = match CurrencySymbol::PRESETS.iter().position(|p| p == currency) {
            Some(i) => i,
            None => {
                custom_currency.set_content(currency.symbol());
                OTHER_CHOICE
            }
        };

        let mut state = Self {
            focus: FormField::Income,
            currency_choice,
            custom_currency,
            income: amount_input(FormField::Income),
            expenses: amount_input(FormField::Expenses),
            savings: amount_input(FormField::Savings),
            investments: amount_input(FormField::Investments),
        };
        state.sync_focus();
        state
    }

    pub fn is_custom_currency(&self) -> bool {
        self.currency_choice == OTHER_CHOICE
    }

    /// Whether keystrokes are currently typed into the custom symbol
    pub fn is_editing_symbol(&self) -> bool {
        self.focus == FormField::Currency && self.is_custom_currency()
    }

    /// The selected currency symbol
    pub fn currency(&self) -> PocketbookResult<CurrencySymbol> {
        match CurrencySymbol::PRESETS.get(self.currency_choice) {
            Some(preset) => Ok(preset.clone()),
            None => CurrencySymbol::custom(self.custom_currency.value()),
        }
    }

    /// Step through `₹ $ € £ Other`
    pub fn cycle_currency(&mut self, forward: bool) {
        let choices = OTHER_CHOICE + 1;
        self.currency_choice = if forward {
            (self.currency_choice + 1) % choices
        } else {
            (self.currency_choice + choices - 1) % choices
        };
        self.sync_focus();
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Move focus, reformatting the field being left
    pub fn set_focus(&mut self, field: FormField) {
        self.normalize(self.focus);
        self.focus = field;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        let focus = self.focus;
        for field in FormField::ALL {
            if let Some(input) = self.amount_input_mut(field) {
                input.focused = field == focus;
            }
        }
        self.custom_currency.focused = self.is_editing_symbol();
    }

    pub fn amount_input(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::Income => Some(&self.income),
            FormField::Expenses => Some(&self.expenses),
            FormField::Savings => Some(&self.savings),
            FormField::Investments => Some(&self.investments),
            FormField::Currency | FormField::Generate => None,
        }
    }

    pub fn amount_input_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::Income => Some(&mut self.income),
            FormField::Expenses => Some(&mut self.expenses),
            FormField::Savings => Some(&mut self.savings),
            FormField::Investments => Some(&mut self.investments),
            FormField::Currency | FormField::Generate => None,
        }
    }

    /// The input receiving typed text, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        if self.is_editing_symbol() {
            return Some(&mut self.custom_currency);
        }
        self.amount_input_mut(self.focus)
    }

    /// Show a valid amount with two decimals
    fn normalize(&mut self, field: FormField) {
        if let Some(input) = self.amount_input_mut(field) {
            if input.value().is_empty() {
                return;
            }
            if let Ok(amount) = Money::parse(input.value()) {
                input.set_content(amount.to_decimal_string());
            }
        }
    }

    fn parse_amount(&self, field: FormField) -> Result<Money, String> {
        let text = self.amount_input(field).map(TextInput::value).unwrap_or("");
        if text.trim().is_empty() {
            return Ok(Money::zero());
        }
        Money::parse(text).map_err(|_| format!("{}: '{}' is not a valid amount", field.label(), text))
    }

    /// The budget described by the form; blank fields count as zero
    pub fn to_input(&self) -> Result<BudgetInput, String> {
        let currency = self.currency().map_err(|e| e.to_string())?;
        BudgetInput::new(
            self.parse_amount(FormField::Income)?,
            self.parse_amount(FormField::Expenses)?,
            self.parse_amount(FormField::Savings)?,
            self.parse_amount(FormField::Investments)?,
            currency,
        )
        .map_err(|e| e.to_string())
    }

    /// Clear every amount
    pub fn clear_amounts(&mut self) {
        for field in FormField::ALL {
            if let Some(input) = self.amount_input_mut(field) {
                input.clear();
            }
        }
    }
}

/// Chart color for a breakdown category
pub fn category_color(category: BreakdownCategory) -> Color {
    match category {
        BreakdownCategory::Expenses => Color::LightRed,
        BreakdownCategory::Savings => Color::LightGreen,
        BreakdownCategory::Investments => Color::LightBlue,
        BreakdownCategory::Remaining => Color::LightYellow,
    }
}

/// Split `width` cells between slices in proportion to their percentages
///
/// Boundaries are rounded from cumulative percentages so the widths always
/// add up to `width`.
pub fn ribbon_widths(percentages: &[f64], width: u16) -> Vec<u16> {
    let mut widths = Vec::with_capacity(percentages.len());
    if percentages.is_empty() {
        return widths;
    }

    let mut cumulative = 0.0;
    let mut used: u16 = 0;
    for pct in percentages {
        cumulative += pct;
        let end = ((cumulative / 100.0) * f64::from(width))
            .round()
            .clamp(0.0, f64::from(width)) as u16;
        let end = end.max(used);
        widths.push(end - used);
        used = end;
    }
    if let Some(last) = widths.last_mut() {
        *last += width - used;
    }
    widths
}

/// Render the analyzer view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = AnalyzerLayout::new(area);
    render_form(frame, app, layout.form);
    render_status(frame, app, layout.status);
    render_charts(frame, app, layout.charts);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Budget ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.form;
    let row = |i: u16| Rect::new(inner.x + 1, inner.y + i, inner.width.saturating_sub(2), 1);
    if inner.height < 7 {
        return;
    }

    // Currency selector
    let selector_focused = form.focus == FormField::Currency;
    let mut spans = vec![
        Span::styled(format!("{:<11}", "Currency"), Style::default().fg(Color::Cyan)),
        Span::raw(": "),
    ];
    let choices = CurrencySymbol::PRESETS
        .iter()
        .map(|p| p.symbol())
        .chain(std::iter::once("Other"));
    for (i, choice) in choices.enumerate() {
        let style = if i == form.currency_choice {
            let base = Style::default().add_modifier(Modifier::BOLD);
            if selector_focused {
                base.fg(Color::Black).bg(Color::Cyan)
            } else {
                base.fg(Color::Yellow)
            }
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", choice), style));
        spans.push(Span::raw(" "));
    }
    let selector = Line::from(spans);
    let selector_width = selector.width() as u16;
    let currency_row = row(0);
    frame.render_widget(Paragraph::new(selector), currency_row);

    if form.is_custom_currency() {
        let x = currency_row.x + selector_width + 1;
        let width = currency_row.width.saturating_sub(selector_width + 1);
        frame.render_widget(
            form.custom_currency.clone(),
            Rect::new(x, currency_row.y, width, 1),
        );
    }

    for (i, field) in [
        FormField::Income,
        FormField::Expenses,
        FormField::Savings,
        FormField::Investments,
    ]
    .into_iter()
    .enumerate()
    {
        if let Some(input) = form.amount_input(field) {
            frame.render_widget(input.clone(), row(i as u16 + 1));
        }
    }

    // Generate button
    let enabled = app.can_generate();
    let button_style = match (form.focus == FormField::Generate, enabled) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Black).bg(Color::DarkGray),
        (false, true) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let button = Line::from(vec![
        Span::styled(format!("[ {} ]", FormField::Generate.label()), button_style),
        Span::styled("  Ctrl+G", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(button), row(6));
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let notice = match &app.budget {
        Ok((input, result)) => BudgetCalculator::status(input, result),
        Err(message) => Notice::error(message.clone()),
    };
    let color = level_color(notice.level);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", notice.level.title()));

    let mut spans = vec![Span::styled(
        notice.message.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Ok((input, result)) = &app.budget {
        spans.push(Span::styled(
            format!("   Outflow: {}", input.format(result.total_outflow)),
            Style::default().fg(Color::Gray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_charts(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.analysis else {
        let hint = if app.can_generate() {
            "Fill in your monthly figures, then press Ctrl+G or select [ Generate Analysis ]."
        } else {
            "Charts are available once your outflows fit within your income."
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Analysis "));
        frame.render_widget(paragraph, area);
        return;
    };

    let (left, right) = chart_panels(area);
    let symbol = report.input.symbol();

    match &report.distribution {
        Some(slices) => render_distribution(frame, slices, symbol, left),
        None => render_placeholder(frame, " Income Distribution ", NO_DISTRIBUTION_MESSAGE, left),
    }
    match &report.outflows {
        Some(entries) => render_outflows(frame, report, entries, right),
        None => render_placeholder(frame, " Expense Breakdown ", NO_OUTFLOWS_MESSAGE, right),
    }
}

fn render_placeholder(frame: &mut Frame, title: &str, message: &str, area: Rect) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Blue))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(paragraph, area);
}

fn render_distribution(frame: &mut Frame, slices: &[ChartSlice], symbol: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Income Distribution ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let percentages: Vec<f64> = slices.iter().map(|s| s.percentage).collect();
    let widths = ribbon_widths(&percentages, inner.width);

    let ribbon: Vec<Span> = slices
        .iter()
        .zip(&widths)
        .map(|(slice, width)| {
            Span::styled(
                "█".repeat(usize::from(*width)),
                Style::default().fg(category_color(slice.category)),
            )
        })
        .collect();

    let mut lines = vec![Line::from(ribbon.clone()), Line::from(ribbon), Line::from("")];
    for slice in slices {
        let color = category_color(slice.category);
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(
                format!("{:<12}", slice.category.label()),
                Style::default().fg(Color::White),
            ),
            Span::styled(slice.label(symbol), Style::default().fg(color)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_outflows(frame: &mut Frame, report: &AnalysisReport, entries: &[BreakdownEntry], area: Rect) {
    let symbol = report.input.symbol();
    let bars: Vec<Bar> = entries
        .iter()
        .map(|entry| {
            let color = category_color(entry.category);
            Bar::default()
                .value(entry.amount.cents().max(0) as u64)
                .label(Line::from(entry.category.label()))
                .text_value(entry.amount.format_whole(symbol))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Expense Breakdown "),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1)
        .max(report.max_outflow().cents().max(1) as u64);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(FormField::Currency.next(), FormField::Income);
        assert_eq!(FormField::Generate.next(), FormField::Currency);
        assert_eq!(FormField::Currency.prev(), FormField::Generate);
    }

    #[test]
    fn test_new_form_selects_currency() {
        let form = AnalyzerFormState::new(&CurrencySymbol::Euro);
        assert_eq!(form.currency().unwrap(), CurrencySymbol::Euro);
        assert_eq!(form.focus, FormField::Income);
        assert!(form.income.focused);

        let form = AnalyzerFormState::new(&CurrencySymbol::Other("CHF".into()));
        assert!(form.is_custom_currency());
        assert_eq!(form.custom_currency.value(), "CHF");
    }

    #[test]
    fn test_cycle_currency() {
        let mut form = AnalyzerFormState::new(&CurrencySymbol::Rupee);
        form.cycle_currency(false);
        assert!(form.is_custom_currency());
        // Blank custom symbol falls back to the rupee sign
        assert_eq!(form.currency().unwrap().symbol(), "₹");
        form.cycle_currency(true);
        assert_eq!(form.currency().unwrap(), CurrencySymbol::Rupee);
    }

    #[test]
    fn test_blank_fields_are_zero() {
        let form = AnalyzerFormState::new(&CurrencySymbol::Dollar);
        let input = form.to_input().unwrap();
        assert_eq!(input, BudgetInput { currency: CurrencySymbol::Dollar, ..Default::default() });
    }

    #[test]
    fn test_to_input_and_normalize() {
        let mut form = AnalyzerFormState::new(&CurrencySymbol::Rupee);
        form.income.set_content("5,000");
        form.expenses.set_content("2000");
        form.set_focus(FormField::Expenses);
        assert_eq!(form.income.value(), "5000.00");

        let input = form.to_input().unwrap();
        assert_eq!(input.income, Money::from_units(5000));
        assert_eq!(input.expenses, Money::from_units(2000));
    }

    #[test]
    fn test_invalid_amount_names_field() {
        let mut form = AnalyzerFormState::new(&CurrencySymbol::Rupee);
        form.savings.set_content(".");
        let err = form.to_input().unwrap_err();
        assert!(err.starts_with("Savings"));
    }

    #[test]
    fn test_ribbon_widths_fill_width() {
        assert_eq!(ribbon_widths(&[50.0, 50.0], 10), vec![5, 5]);
        assert_eq!(ribbon_widths(&[40.0, 30.0, 20.0, 10.0], 10), vec![4, 3, 2, 1]);

        let widths = ribbon_widths(&[33.3, 33.3, 33.4], 7);
        assert_eq!(widths.iter().sum::<u16>(), 7);
        assert!(ribbon_widths(&[], 10).is_empty());
    }
}
