//! Service layer for Pocketbook
//!
//! The service layer holds the decision logic: budget arithmetic and the FAQ
//! lookup. Everything here is synchronous and side-effect free.

pub mod calculator;
pub mod faq;

pub use calculator::BudgetCalculator;
pub use faq::FaqService;
