//! Core data models for Pocketbook
//!
//! This module contains the data structures of the finance assistant: money
//! amounts, currency symbols, budget inputs and results, chart breakdown
//! entries, FAQ entries and status notices.

pub mod breakdown;
pub mod budget;
pub mod currency;
pub mod faq;
pub mod money;
pub mod notice;

pub use breakdown::{BreakdownCategory, BreakdownEntry};
pub use budget::{BudgetInput, BudgetResult, MAX_AMOUNT};
pub use currency::CurrencySymbol;
pub use faq::{FaqEntry, FAQ_ENTRIES};
pub use money::{Money, MoneyParseError};
pub use notice::{Notice, NoticeLevel};
