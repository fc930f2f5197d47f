//! Budget input and derived result models

use serde::{Deserialize, Serialize};

use super::currency::CurrencySymbol;
use super::money::Money;
use crate::error::{PocketbookError, PocketbookResult};

/// Largest amount accepted for any single field (one trillion units)
///
/// Four maximal amounts still sum well inside `i64` hundredths.
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// The four monthly amounts entered by the user, plus the display symbol
///
/// All four amounts lie in `0..=MAX_AMOUNT`. [`BudgetInput::new`] enforces
/// this; the TUI form can never produce a negative amount in the first place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BudgetInput {
    /// Total monthly income
    pub income: Money,
    /// Living expenses
    pub expenses: Money,
    /// Amount put into savings
    pub savings: Money,
    /// Amount invested
    pub investments: Money,
    /// Currency display symbol
    pub currency: CurrencySymbol,
}

impl BudgetInput {
    /// Create a validated budget input
    pub fn new(
        income: Money,
        expenses: Money,
        savings: Money,
        investments: Money,
        currency: CurrencySymbol,
    ) -> PocketbookResult<Self> {
        let input = Self {
            income,
            expenses,
            savings,
            investments,
            currency,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check that every amount is between zero and [`MAX_AMOUNT`]
    pub fn validate(&self) -> PocketbookResult<()> {
        for (name, amount) in [
            ("Income", self.income),
            ("Expenses", self.expenses),
            ("Savings", self.savings),
            ("Investments", self.investments),
        ] {
            if amount.is_negative() {
                return Err(PocketbookError::Validation(format!(
                    "{} cannot be negative (got {})",
                    name, amount
                )));
            }
            if amount > MAX_AMOUNT {
                return Err(PocketbookError::Validation(format!(
                    "{} exceeds the maximum of {}",
                    name, MAX_AMOUNT
                )));
            }
        }
        Ok(())
    }

    /// The display symbol for this input
    pub fn symbol(&self) -> &str {
        self.currency.symbol()
    }

    /// Format an amount with this input's currency symbol
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_symbol(self.symbol())
    }
}

/// Figures derived from a [`BudgetInput`]
///
/// Immutable; recomputed from scratch whenever the input changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetResult {
    /// expenses + savings + investments
    pub total_outflow: Money,
    /// income - total_outflow, negative when overspent
    pub remaining: Money,
    /// total_outflow > income
    pub is_over_budget: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_zeros() {
        let input = BudgetInput::new(
            Money::zero(),
            Money::zero(),
            Money::zero(),
            Money::zero(),
            CurrencySymbol::default(),
        )
        .unwrap();
        assert_eq!(input, BudgetInput::default());
    }

    #[test]
    fn test_new_rejects_negative() {
        let err = BudgetInput::new(
            Money::from_units(100),
            Money::from_units(-1),
            Money::zero(),
            Money::zero(),
            CurrencySymbol::Dollar,
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Expenses"));
    }

    #[test]
    fn test_new_rejects_amount_above_maximum() {
        let at_max = BudgetInput::new(
            MAX_AMOUNT,
            MAX_AMOUNT,
            MAX_AMOUNT,
            MAX_AMOUNT,
            CurrencySymbol::Dollar,
        );
        assert!(at_max.is_ok());

        let err = BudgetInput::new(
            Money::from_units(1),
            Money::from_units(40_000_000_000_000_000),
            Money::zero(),
            Money::zero(),
            CurrencySymbol::Dollar,
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Expenses exceeds the maximum"));
    }

    #[test]
    fn test_format_uses_symbol() {
        let input = BudgetInput {
            currency: CurrencySymbol::Euro,
            ..Default::default()
        };
        assert_eq!(input.format(Money::from_units(2500)), "€2,500.00");
    }
}
