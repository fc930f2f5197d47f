//! Budget calculator
//!
//! Pure functions from a [`BudgetInput`] to the figures and chart breakdowns
//! the analyzer shows. Nothing here can fail: overspending is a result, not
//! an error.

use tracing::debug;

use crate::models::{BreakdownCategory, BreakdownEntry, BudgetInput, BudgetResult, Notice};

/// Stateless budget computations
pub struct BudgetCalculator;

impl BudgetCalculator {
    /// Compute total outflow, remaining balance and the over-budget flag
    pub fn compute(input: &BudgetInput) -> BudgetResult {
        let total_outflow = input.expenses + input.savings + input.investments;
        let remaining = input.income - total_outflow;
        let is_over_budget = total_outflow > input.income;

        debug!(
            income = %input.income,
            total_outflow = %total_outflow,
            remaining = %remaining,
            is_over_budget,
            "computed budget"
        );

        BudgetResult {
            total_outflow,
            remaining,
            is_over_budget,
        }
    }

    /// Breakdown for the proportion chart
    ///
    /// Expenses, Savings, Investments, Remaining in that order, with every
    /// entry whose amount is zero or negative dropped. An overspent budget
    /// therefore never shows a Remaining slice; callers warn separately.
    pub fn breakdown(input: &BudgetInput, result: &BudgetResult) -> Vec<BreakdownEntry> {
        BreakdownCategory::ALL
            .iter()
            .map(|&category| {
                let amount = match category {
                    BreakdownCategory::Expenses => input.expenses,
                    BreakdownCategory::Savings => input.savings,
                    BreakdownCategory::Investments => input.investments,
                    BreakdownCategory::Remaining => result.remaining,
                };
                BreakdownEntry::new(category, amount)
            })
            .filter(|entry| entry.amount.is_positive())
            .collect()
    }

    /// Breakdown for the magnitude chart: outflow categories only
    pub fn outflow_breakdown(input: &BudgetInput) -> Vec<BreakdownEntry> {
        let result = Self::compute(input);
        Self::breakdown(input, &result)
            .into_iter()
            .filter(|entry| entry.category.is_outflow())
            .collect()
    }

    /// The status banner for a computed budget
    pub fn status(input: &BudgetInput, result: &BudgetResult) -> Notice {
        if result.is_over_budget {
            Notice::error(format!(
                "Your total spending ({}) exceeds your income ({})!",
                input.format(result.total_outflow),
                input.format(input.income)
            ))
        } else {
            Notice::success(format!(
                "Remaining Balance: {}",
                input.format(result.remaining)
            ))
        }
    }
}
