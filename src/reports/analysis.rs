//! Budget analysis report
//!
//! The "Generate Analysis" step: decides which charts are worth drawing for a
//! budget and builds their data. Rendering is left to the caller (TUI widgets
//! or the plain-text formatter below).

use serde::Serialize;
use std::io::Write;
use tracing::{debug, warn};

use crate::display::report::{
    double_separator, format_bar, format_notice, format_percentage, format_section, left_align,
    right_align,
};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{BreakdownCategory, BreakdownEntry, BudgetInput, BudgetResult, Money, Notice};
use crate::services::BudgetCalculator;

/// Shown instead of the proportion chart when there is nothing to divide
pub const NO_DISTRIBUTION_MESSAGE: &str =
    "Please enter your income and at least one outflow to see the distribution.";

/// Shown instead of the magnitude chart when every outflow is zero
pub const NO_OUTFLOWS_MESSAGE: &str = "No outflows (expenses, savings, or investments) entered.";

/// Shown when charts are withheld because spending exceeds income
pub const OVER_BUDGET_MESSAGE: &str =
    "Spending exceeds income. Reduce your outflows to generate the analysis.";

const REPORT_WIDTH: usize = 64;
const BAR_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 12;

/// One slice of the proportion chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSlice {
    pub category: BreakdownCategory,
    pub amount: Money,
    /// Share of the chart total, 0-100
    pub percentage: f64,
}

impl ChartSlice {
    /// Slice label: percentage plus rounded amount, e.g. "57.1% (₹2,000)"
    pub fn label(&self, symbol: &str) -> String {
        format!(
            "{} ({})",
            format_percentage(self.percentage),
            self.amount.format_whole(symbol)
        )
    }
}

/// Result of generating an analysis for one budget input
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub input: BudgetInput,
    pub result: BudgetResult,
    /// Remaining-balance or overspending banner
    pub status: Notice,
    /// Proportion chart data, absent when skipped
    pub distribution: Option<Vec<ChartSlice>>,
    /// Magnitude chart data, absent when skipped
    pub outflows: Option<Vec<BreakdownEntry>>,
    /// Why charts were skipped, in display order
    pub notices: Vec<Notice>,
}

impl AnalysisReport {
    /// Generate the analysis for a budget input
    pub fn generate(input: &BudgetInput) -> Self {
        let result = BudgetCalculator::compute(input);
        let status = BudgetCalculator::status(input, &result);

        if result.is_over_budget {
            warn!(
                total_outflow = %result.total_outflow,
                income = %input.income,
                "analysis requested while over budget"
            );
            return Self {
                input: input.clone(),
                result,
                status,
                distribution: None,
                outflows: None,
                notices: vec![Notice::warning(OVER_BUDGET_MESSAGE)],
            };
        }

        let mut notices = Vec::new();

        let breakdown = BudgetCalculator::breakdown(input, &result);
        let distribution = if breakdown.is_empty() || input.income.is_zero() {
            notices.push(Notice::info(NO_DISTRIBUTION_MESSAGE));
            None
        } else {
            Some(Self::slices(&breakdown))
        };

        let outflow_entries = BudgetCalculator::outflow_breakdown(input);
        let outflows = if outflow_entries.is_empty() {
            notices.push(Notice::info(NO_OUTFLOWS_MESSAGE));
            None
        } else {
            Some(outflow_entries)
        };

        debug!(
            slices = distribution.as_ref().map_or(0, Vec::len),
            bars = outflows.as_ref().map_or(0, Vec::len),
            "generated analysis"
        );

        Self {
            input: input.clone(),
            result,
            status,
            distribution,
            outflows,
            notices,
        }
    }

    fn slices(entries: &[BreakdownEntry]) -> Vec<ChartSlice> {
        let total: Money = entries.iter().map(|e| e.amount).sum();
        entries
            .iter()
            .map(|e| ChartSlice {
                category: e.category,
                amount: e.amount,
                percentage: e.amount.percent_of(total),
            })
            .collect()
    }

    /// Whether at least one chart was produced
    pub fn has_charts(&self) -> bool {
        self.distribution.is_some() || self.outflows.is_some()
    }

    /// Largest bar in the magnitude chart
    pub fn max_outflow(&self) -> Money {
        self.outflows
            .iter()
            .flatten()
            .map(|e| e.amount)
            .max()
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let symbol = self.input.symbol();
        let mut output = String::new();

        output.push_str(&format!("Budget Analysis ({})\n", symbol));
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');
        for (label, amount) in [
            ("Income", self.input.income),
            ("Expenses", self.input.expenses),
            ("Savings", self.input.savings),
            ("Investments", self.input.investments),
            ("Total Outflow", self.result.total_outflow),
            ("Remaining", self.result.remaining),
        ] {
            output.push_str(&format!(
                "{}{}\n",
                left_align(&format!("{}:", label), 16),
                right_align(&amount.format_with_symbol(symbol), 18)
            ));
        }
        output.push('\n');
        output.push_str(&format_notice(&self.status));
        output.push('\n');

        if let Some(slices) = &self.distribution {
            output.push('\n');
            output.push_str(&format_section("Income Distribution", REPORT_WIDTH));
            for slice in slices {
                output.push_str(&format!(
                    "{} {}  {}\n",
                    left_align(slice.category.label(), LABEL_WIDTH),
                    format_bar(slice.percentage, 100.0, BAR_WIDTH),
                    slice.label(symbol)
                ));
            }
        }

        if let Some(entries) = &self.outflows {
            let max = self.max_outflow().as_f64();
            output.push('\n');
            output.push_str(&format_section("Outflow Breakdown", REPORT_WIDTH));
            for entry in entries {
                output.push_str(&format!(
                    "{} {}  {}\n",
                    left_align(entry.category.label(), LABEL_WIDTH),
                    format_bar(entry.amount.as_f64(), max, BAR_WIDTH),
                    entry.amount.format_with_symbol(symbol)
                ));
            }
        }

        if !self.notices.is_empty() {
            output.push('\n');
            for notice in &self.notices {
                output.push_str(&format_notice(notice));
                output.push('\n');
            }
        }

        output
    }

    /// Export the chart data to CSV, one row per chart entry
    ///
    /// The header is always written and the last row carries the remaining
    /// balance, so a budget with no charts still yields a readable file.
    pub fn export_csv<W: Write>(&self, writer: W) -> PocketbookResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(CSV_HEADERS)?;

        for slice in self.distribution.iter().flatten() {
            wtr.serialize(CsvRow {
                chart: "distribution",
                category: slice.category.label(),
                amount: slice.amount.to_decimal_string(),
                percentage: Some(format!("{:.2}", slice.percentage)),
            })?;
        }

        for entry in self.outflows.iter().flatten() {
            wtr.serialize(CsvRow {
                chart: "outflows",
                category: entry.category.label(),
                amount: entry.amount.to_decimal_string(),
                percentage: None,
            })?;
        }

        wtr.serialize(CsvRow {
            chart: "status",
            category: BreakdownCategory::Remaining.label(),
            amount: self.result.remaining.to_decimal_string(),
            percentage: None,
        })?;

        wtr.flush()
            .map_err(|e| PocketbookError::Export(e.to_string()))?;
        Ok(())
    }

    /// Export the full report as pretty JSON
    pub fn export_json<W: Write>(&self, writer: W) -> PocketbookResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Export the full report as YAML
    pub fn export_yaml<W: Write>(&self, writer: W) -> PocketbookResult<()> {
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

const CSV_HEADERS: [&str; 4] = ["Chart", "Category", "Amount", "Percentage"];

#[derive(Serialize)]
struct CsvRow {
    chart: &'static str,
    category: &'static str,
    amount: String,
    percentage: Option<String>,
}
