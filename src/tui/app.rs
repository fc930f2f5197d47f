//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every edit of the analyzer form goes through [`App::recompute`], which
//! refreshes the live budget and discards any generated charts.

use tracing::{debug, info};

use crate::config::settings::{Mode, Settings};
use crate::models::{BudgetInput, BudgetResult};
use crate::reports::AnalysisReport;
use crate::services::BudgetCalculator;

use super::views::analyzer::AnalyzerFormState;
use super::views::faq::FaqViewState;
use super::widgets::{Notification, NotificationQueue};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// User settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Analyzer or FAQ
    pub mode: Mode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Analyzer input form
    pub form: AnalyzerFormState,

    /// Budget computed from the form, or why the form cannot be read
    pub budget: Result<(BudgetInput, BudgetResult), String>,

    /// Charts from the last "Generate Analysis", cleared on every edit
    pub analysis: Option<AnalysisReport>,

    /// FAQ list state
    pub faq: FaqViewState,

    /// Toasts
    pub notifications: NotificationQueue,

    /// Status bar message
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        let mut app = Self {
            settings,
            should_quit: false,
            mode: settings.default_mode,
            active_dialog: ActiveDialog::None,
            form: AnalyzerFormState::new(&settings.currency_symbol),
            budget: Err(String::new()),
            analysis: None,
            faq: FaqViewState::new(),
            notifications: NotificationQueue::new(),
            status_message: None,
        };
        app.recompute();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!(%mode, "switched mode");
            self.mode = mode;
            self.status_message = None;
        }
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Whether printable keys are typed into a text field rather than
    /// treated as shortcuts
    pub fn is_capturing_text(&self) -> bool {
        self.mode == Mode::Analyzer && self.form.is_editing_symbol()
    }

    /// Re-read the form after an edit
    pub fn recompute(&mut self) {
        self.analysis = None;
        self.budget = self.form.to_input().map(|input| {
            let result = BudgetCalculator::compute(&input);
            (input, result)
        });
        if let Err(message) = &self.budget {
            debug!(%message, "form cannot be read");
        }
    }

    /// Whether "Generate Analysis" is available
    pub fn can_generate(&self) -> bool {
        matches!(&self.budget, Ok((_, result)) if !result.is_over_budget)
    }

    /// Build the charts for the current form
    pub fn generate_analysis(&mut self) {
        let input = match &self.budget {
            Ok((input, _)) => input.clone(),
            Err(message) => {
                self.notifications.push(Notification::error(message.clone()));
                return;
            }
        };

        let report = AnalysisReport::generate(&input);
        for notice in &report.notices {
            self.notifications.push(notice.clone());
        }

        if report.result.is_over_budget {
            self.analysis = None;
            return;
        }

        if report.has_charts() {
            self.set_status("Analysis generated");
        }
        self.analysis = Some(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::tui::views::analyzer::FormField;

    fn fill(app: &mut App, income: &str, expenses: &str, savings: &str, investments: &str) {
        app.form.income.set_content(income);
        app.form.expenses.set_content(expenses);
        app.form.savings.set_content(savings);
        app.form.investments.set_content(investments);
        app.recompute();
    }

    #[test]
    fn test_starts_from_zero() {
        let settings = Settings::default();
        let app = App::new(&settings);
        let (input, result) = app.budget.as_ref().unwrap();
        assert_eq!(input.income, Money::zero());
        assert!(!result.is_over_budget);
        assert!(app.analysis.is_none());
        assert_eq!(app.mode, Mode::Analyzer);
    }

    #[test]
    fn test_generate_then_edit_clears_charts() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        fill(&mut app, "5000", "2000", "1000", "500");

        app.generate_analysis();
        let report = app.analysis.as_ref().unwrap();
        assert_eq!(report.distribution.as_ref().unwrap().len(), 4);
        assert!(app.notifications.is_empty());

        app.form.set_focus(FormField::Income);
        app.form.income.insert('0');
        app.recompute();
        assert!(app.analysis.is_none());
    }

    #[test]
    fn test_over_budget_disables_generate() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        fill(&mut app, "1000", "800", "300", "");
        assert!(!app.can_generate());

        app.generate_analysis();
        assert!(app.analysis.is_none());
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn test_all_zero_generates_notices_only() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.generate_analysis();

        let report = app.analysis.as_ref().unwrap();
        assert!(!report.has_charts());
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn test_unreadable_form_reports_error() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        fill(&mut app, ".", "", "", "");
        assert!(app.budget.is_err());
        assert!(!app.can_generate());

        app.generate_analysis();
        assert!(app.analysis.is_none());
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn test_switch_mode_clears_status() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.set_status("Amounts cleared");

        app.switch_mode(Mode::Analyzer);
        assert!(app.status_message.is_some());
        app.switch_mode(Mode::Faq);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_huge_amounts_block_generate() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let huge = "40000000000000000";
        fill(&mut app, "1", huge, huge, huge);

        let message = app.budget.as_ref().unwrap_err();
        assert!(message.contains("exceeds the maximum"));
        assert!(!app.can_generate());

        fill(&mut app, "99999999999999999999", "", "", "");
        assert!(app.budget.is_err());
    }
}
