//! Finance FAQ catalog
//!
//! A fixed set of questions and canned answers, compiled into the binary.

use serde::Serialize;

/// A question and its canned answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// All FAQ entries, in display order
pub static FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What is savings?",
        answer: "Savings is the portion of income you don't spend. It's typically stored in a bank account or investment for future use.",
    },
    FaqEntry {
        question: "How do I budget monthly?",
        answer: "Budgeting involves tracking income and expenses. A popular rule is the 50/30/20 Rule: 50% Needs, 30% Wants, 20% Savings.",
    },
    FaqEntry {
        question: "What is debt?",
        answer: "Debt is borrowed money that must be repaid, often with interest. Examples include credit cards, loans, and mortgages.",
    },
    FaqEntry {
        question: "How to pay off debt fast?",
        answer: "Use strategies like the Snowball Method (pay smallest debts first) or Avalanche Method (pay highest interest debt first).",
    },
    FaqEntry {
        question: "What is the 50/30/20 Rule?",
        answer: "50% of income to necessities, 30% to wants, 20% to savings or debt repayment.",
    },
    FaqEntry {
        question: "What is an emergency fund?",
        answer: "Savings set aside for unexpected expenses. Aim for 3–6 months of expenses.",
    },
    FaqEntry {
        question: "What are good vs bad debts?",
        answer: "Good debt builds value (e.g., education loan). Bad debt drains finances (e.g., credit cards).",
    },
    FaqEntry {
        question: "What is compound interest?",
        answer: "Compound interest is interest on interest. It grows savings or debt faster over time.",
    },
    FaqEntry {
        question: "What is inflation?",
        answer: "Inflation is the rise in prices over time, which reduces purchasing power.",
    },
    FaqEntry {
        question: "What is financial freedom?",
        answer: "Having enough income/savings to afford your lifestyle without relying on work.",
    },
    FaqEntry {
        question: "What are assets and liabilities?",
        answer: "Assets = what you own. Liabilities = what you owe. Net worth = Assets - Liabilities.",
    },
    FaqEntry {
        question: "How can I start investing as a beginner?",
        answer: "Start with SIPs, index funds or mutual funds. Stay consistent and learn basics.",
    },
    FaqEntry {
        question: "What is the rule of 72?",
        answer: "72 ÷ Interest Rate = Years to double your money.",
    },
];
