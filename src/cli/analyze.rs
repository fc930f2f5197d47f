//! Analyze CLI command
//!
//! Runs the budget analysis non-interactively and prints the result as text,
//! JSON, YAML or CSV.

use clap::{Args, ValueEnum};
use std::io::{self, Write};

use crate::config::settings::Settings;
use crate::display::report::format_notice;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{BudgetInput, CurrencySymbol, Money, MAX_AMOUNT};
use crate::reports::AnalysisReport;

/// Output format for the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Status plus text charts
    #[default]
    Text,
    /// Full report as JSON
    Json,
    /// Full report as YAML
    Yaml,
    /// Chart rows as CSV
    Csv,
}

/// Arguments for `analyze`
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Total monthly income
    #[arg(short, long, default_value = "0", value_parser = parse_amount, allow_negative_numbers = true)]
    pub income: Money,

    /// Monthly expenses
    #[arg(short, long, default_value = "0", value_parser = parse_amount, allow_negative_numbers = true)]
    pub expenses: Money,

    /// Monthly savings
    #[arg(short, long, default_value = "0", value_parser = parse_amount, allow_negative_numbers = true)]
    pub savings: Money,

    /// Monthly investments
    #[arg(short = 'n', long, default_value = "0", value_parser = parse_amount, allow_negative_numbers = true)]
    pub investments: Money,

    /// Currency symbol (defaults to the configured one)
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Parse an amount in `0..=MAX_AMOUNT` for clap
fn parse_amount(s: &str) -> Result<Money, String> {
    let amount = Money::parse(s).map_err(|e| e.to_string())?;
    if amount.is_negative() {
        return Err(format!("amount cannot be negative: {}", s.trim()));
    }
    if amount > MAX_AMOUNT {
        return Err(format!(
            "amount exceeds the maximum of {}: {}",
            MAX_AMOUNT,
            s.trim()
        ));
    }
    Ok(amount)
}

/// Handle the analyze command
pub fn handle_analyze_command(settings: &Settings, args: AnalyzeArgs) -> PocketbookResult<()> {
    let currency = match args.currency.as_deref() {
        Some(text) => CurrencySymbol::custom(text)?,
        None => settings.currency_symbol.clone(),
    };

    let input = BudgetInput::new(
        args.income,
        args.expenses,
        args.savings,
        args.investments,
        currency,
    )?;

    let report = AnalysisReport::generate(&input);

    if args.format == OutputFormat::Csv {
        write_notices(&report, &mut io::stderr().lock())?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&report, args.format, &mut out)
}

/// Write the status banner and any skip notices, one per line
///
/// CSV carries only chart rows, so these go to stderr alongside it.
pub fn write_notices<W: Write>(report: &AnalysisReport, out: &mut W) -> PocketbookResult<()> {
    for notice in std::iter::once(&report.status).chain(&report.notices) {
        writeln!(out, "{}", format_notice(notice))?;
    }
    Ok(())
}

/// Write a report in the requested format
pub fn write_report<W: Write>(
    report: &AnalysisReport,
    format: OutputFormat,
    out: &mut W,
) -> PocketbookResult<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", report.format_terminal())?,
        OutputFormat::Json => {
            report.export_json(&mut *out)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => report.export_yaml(&mut *out)?,
        OutputFormat::Csv => report.export_csv(&mut *out)?,
    }
    out.flush()
        .map_err(|e| PocketbookError::Io(format!("Failed to write output: {}", e)))
}
