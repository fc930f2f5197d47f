//! FAQ service
//!
//! Lookup and search over a FAQ catalog. The application uses the built-in
//! [`FAQ_ENTRIES`]; tests may supply their own catalog.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{FaqEntry, FAQ_ENTRIES};

/// Service for FAQ lookups
pub struct FaqService<'a> {
    entries: &'a [FaqEntry],
}

impl FaqService<'static> {
    /// Create a service over the built-in catalog
    pub fn new() -> Self {
        Self {
            entries: FAQ_ENTRIES,
        }
    }
}

impl Default for FaqService<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FaqService<'a> {
    /// Create a service over a custom catalog
    pub fn with_entries(entries: &'a [FaqEntry]) -> Self {
        Self { entries }
    }

    /// Exact-match lookup of an answer
    ///
    /// A blank question means "no selection" and never matches.
    pub fn lookup(&self, question: &str) -> Option<&'a str> {
        if question.trim().is_empty() {
            return None;
        }
        let entries = self.entries;
        entries
            .iter()
            .find(|entry| entry.question == question)
            .map(|entry| entry.answer)
    }

    /// Like [`lookup`](Self::lookup), but a miss is an error
    pub fn answer(&self, question: &str) -> PocketbookResult<&'a str> {
        self.lookup(question)
            .ok_or_else(|| PocketbookError::question_not_found(question))
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &'a [FaqEntry] {
        self.entries
    }

    /// All questions in catalog order
    pub fn questions(&self) -> impl Iterator<Item = &'a str> + 'a {
        let entries = self.entries;
        entries.iter().map(|entry| entry.question)
    }

    /// Number of questions in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring search over questions
    pub fn search(&self, term: &str) -> Vec<&'a FaqEntry> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        let entries = self.entries;
        entries
            .iter()
            .filter(|entry| entry.question.to_lowercase().contains(&term))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(FaqService::new().len(), 13);
    }

    #[test]
    fn test_rule_of_72() {
        let faq = FaqService::new();
        assert_eq!(
            faq.lookup("What is the rule of 72?"),
            Some("72 ÷ Interest Rate = Years to double your money.")
        );
    }

    #[test]
    fn test_every_question_resolves() {
        let faq = FaqService::new();
        for entry in FAQ_ENTRIES {
            assert_eq!(faq.lookup(entry.question), Some(entry.answer));
        }
    }

    #[test]
    fn test_misses() {
        let faq = FaqService::new();
        assert_eq!(faq.lookup(""), None);
        assert_eq!(faq.lookup("   "), None);
        assert_eq!(faq.lookup("what is the rule of 72?"), None);
        assert_eq!(faq.lookup("What is the rule of 72"), None);
        assert_eq!(faq.lookup("What is a bond?"), None);
    }

    #[test]
    fn test_answer_not_found() {
        let err = FaqService::new().answer("What is a bond?").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_search() {
        let faq = FaqService::new();
        let hits: Vec<_> = faq.search("DEBT").iter().map(|e| e.question).collect();
        assert_eq!(
            hits,
            vec![
                "What is debt?",
                "How to pay off debt fast?",
                "What are good vs bad debts?",
            ]
        );
        assert!(faq.search("  ").is_empty());
    }

    #[test]
    fn test_custom_catalog() {
        let entries = [FaqEntry {
            question: "Q?",
            answer: "A.",
        }];
        let faq = FaqService::with_entries(&entries);
        assert_eq!(faq.lookup("Q?"), Some("A."));
        assert_eq!(faq.questions().collect::<Vec<_>>(), vec!["Q?"]);
    }
}
