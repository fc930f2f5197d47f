//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts. The help dialog is
//! generated from this table.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active in the analyzer form
    Analyzer,
    /// Active in the FAQ view
    Faq,
}

impl KeyContext {
    pub const ALL: [KeyContext; 3] = [KeyContext::Global, KeyContext::Analyzer, KeyContext::Faq];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Analyzer => "Budget Analyzer",
            Self::Faq => "Finance FAQ",
        }
    }
}

const fn kb(
    key: KeyCode,
    modifiers: KeyModifiers,
    description: &'static str,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        modifiers,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    kb(KeyCode::Char('q'), KeyModifiers::NONE, "Quit", KeyContext::Global),
    kb(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit", KeyContext::Global),
    kb(KeyCode::Char('?'), KeyModifiers::NONE, "Show help", KeyContext::Global),
    kb(KeyCode::F(1), KeyModifiers::NONE, "Show help", KeyContext::Global),
    kb(KeyCode::F(2), KeyModifiers::NONE, "Budget analyzer", KeyContext::Global),
    kb(KeyCode::F(3), KeyModifiers::NONE, "Finance FAQ", KeyContext::Global),
    // Analyzer
    kb(KeyCode::Tab, KeyModifiers::NONE, "Next field", KeyContext::Analyzer),
    kb(KeyCode::BackTab, KeyModifiers::SHIFT, "Previous field", KeyContext::Analyzer),
    kb(KeyCode::Down, KeyModifiers::NONE, "Next field", KeyContext::Analyzer),
    kb(KeyCode::Up, KeyModifiers::NONE, "Previous field", KeyContext::Analyzer),
    kb(KeyCode::Left, KeyModifiers::NONE, "Change currency / move cursor", KeyContext::Analyzer),
    kb(KeyCode::Right, KeyModifiers::NONE, "Change currency / move cursor", KeyContext::Analyzer),
    kb(KeyCode::Enter, KeyModifiers::NONE, "Next field / generate", KeyContext::Analyzer),
    kb(KeyCode::Char('g'), KeyModifiers::CONTROL, "Generate analysis", KeyContext::Analyzer),
    kb(KeyCode::Char('u'), KeyModifiers::CONTROL, "Clear field", KeyContext::Analyzer),
    kb(KeyCode::Char('r'), KeyModifiers::CONTROL, "Reset all amounts", KeyContext::Analyzer),
    // FAQ
    kb(KeyCode::Down, KeyModifiers::NONE, "Next question", KeyContext::Faq),
    kb(KeyCode::Char('j'), KeyModifiers::NONE, "Next question", KeyContext::Faq),
    kb(KeyCode::Up, KeyModifiers::NONE, "Previous question", KeyContext::Faq),
    kb(KeyCode::Char('k'), KeyModifiers::NONE, "Previous question", KeyContext::Faq),
    kb(KeyCode::Enter, KeyModifiers::NONE, "Show answer", KeyContext::Faq),
    kb(KeyCode::Backspace, KeyModifiers::NONE, "Clear selection", KeyContext::Faq),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let generate = kb(KeyCode::Char('g'), KeyModifiers::CONTROL, "", KeyContext::Analyzer);
        assert_eq!(format_keybinding(&generate), "Ctrl+g");
        let back = kb(KeyCode::BackTab, KeyModifiers::SHIFT, "", KeyContext::Analyzer);
        assert_eq!(format_keybinding(&back), "Shift+Tab");
        let help = kb(KeyCode::F(1), KeyModifiers::NONE, "", KeyContext::Global);
        assert_eq!(format_keybinding(&help), "F1");
    }

    #[test]
    fn test_every_context_has_bindings() {
        for context in KeyContext::ALL {
            assert!(!get_keybindings(context).is_empty());
        }
    }
}
