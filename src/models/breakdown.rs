//! Breakdown entries handed to chart renderers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Category of a breakdown entry, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BreakdownCategory {
    Expenses,
    Savings,
    Investments,
    Remaining,
}

impl BreakdownCategory {
    /// All categories in chart order
    pub const ALL: [BreakdownCategory; 4] = [
        BreakdownCategory::Expenses,
        BreakdownCategory::Savings,
        BreakdownCategory::Investments,
        BreakdownCategory::Remaining,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expenses => "Expenses",
            Self::Savings => "Savings",
            Self::Investments => "Investments",
            Self::Remaining => "Remaining",
        }
    }

    /// Whether money in this category leaves the budget
    pub fn is_outflow(&self) -> bool {
        !matches!(self, Self::Remaining)
    }
}

impl fmt::Display for BreakdownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One labeled category/amount pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub category: BreakdownCategory,
    pub amount: Money,
}

impl BreakdownEntry {
    pub fn new(category: BreakdownCategory, amount: Money) -> Self {
        Self { category, amount }
    }
}
