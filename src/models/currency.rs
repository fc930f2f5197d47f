//! Currency display symbols
//!
//! The analyzer never converts between currencies; the symbol is purely a
//! display prefix chosen from a fixed set of presets or typed by the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PocketbookError, PocketbookResult};

/// Symbol used when a custom symbol is left blank
pub const DEFAULT_SYMBOL: &str = "₹";

/// Longest custom symbol accepted, in characters
pub const MAX_SYMBOL_LEN: usize = 8;

/// A currency display symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", try_from = "String")]
pub enum CurrencySymbol {
    #[default]
    Rupee,
    Dollar,
    Euro,
    Pound,
    /// A user-supplied symbol
    Other(String),
}

impl CurrencySymbol {
    /// The presets offered by the selector, in display order
    pub const PRESETS: [CurrencySymbol; 4] = [
        CurrencySymbol::Rupee,
        CurrencySymbol::Dollar,
        CurrencySymbol::Euro,
        CurrencySymbol::Pound,
    ];

    /// Build a custom symbol from user text
    ///
    /// Blank text falls back to the default symbol. Text that matches a
    /// preset resolves to that preset.
    pub fn custom(text: &str) -> PocketbookResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::Other(DEFAULT_SYMBOL.to_string()));
        }
        if text.chars().count() > MAX_SYMBOL_LEN {
            return Err(PocketbookError::Validation(format!(
                "Currency symbol '{}' is longer than {} characters",
                text, MAX_SYMBOL_LEN
            )));
        }
        Ok(Self::PRESETS
            .iter()
            .find(|preset| preset.symbol() == text)
            .cloned()
            .unwrap_or_else(|| Self::Other(text.to_string())))
    }

    /// The display symbol
    pub fn symbol(&self) -> &str {
        match self {
            Self::Rupee => "₹",
            Self::Dollar => "$",
            Self::Euro => "€",
            Self::Pound => "£",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for CurrencySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<String> for CurrencySymbol {
    type Error = PocketbookError;

    fn try_from(value: String) -> PocketbookResult<Self> {
        Self::custom(&value)
    }
}

impl From<CurrencySymbol> for String {
    fn from(value: CurrencySymbol) -> Self {
        value.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rupee() {
        assert_eq!(CurrencySymbol::default().symbol(), "₹");
    }

    #[test]
    fn test_custom_blank_falls_back() {
        let symbol = CurrencySymbol::custom("   ").unwrap();
        assert_eq!(symbol.symbol(), DEFAULT_SYMBOL);
    }

    #[test]
    fn test_custom_matching_preset() {
        assert_eq!(CurrencySymbol::custom(" $ ").unwrap(), CurrencySymbol::Dollar);
        assert_eq!(
            CurrencySymbol::custom("CHF").unwrap(),
            CurrencySymbol::Other("CHF".into())
        );
    }

    #[test]
    fn test_custom_too_long() {
        let err = CurrencySymbol::custom("ABCDEFGHI").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_serde_as_symbol() {
        let json = serde_json::to_string(&CurrencySymbol::Euro).unwrap();
        assert_eq!(json, "\"€\"");
        let back: CurrencySymbol = serde_json::from_str("\"Rs\"").unwrap();
        assert_eq!(back, CurrencySymbol::Other("Rs".into()));
        let back: CurrencySymbol = serde_json::from_str("\"£\"").unwrap();
        assert_eq!(back, CurrencySymbol::Pound);
    }

    #[test]
    fn test_deserialize_rejects_long_symbol() {
        let err = serde_json::from_str::<CurrencySymbol>("\"DOUBLOONS\"").unwrap_err();
        assert!(err.to_string().contains("longer than 8 characters"));
    }
}
