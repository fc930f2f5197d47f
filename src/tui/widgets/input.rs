//! Text input widget
//!
//! A single-line input field with cursor support. Amount fields only accept
//! characters that can appear in a non-negative amount, so a negative value
//! can never be typed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Longest amount text accepted ("1,000,000,000,000.00")
pub const AMOUNT_MAX_LEN: usize = 20;

/// What an input accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Any printable character
    #[default]
    Text,
    /// Digits, `,` and a single `.`
    Amount,
}

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Accepted characters
    pub kind: InputKind,
    /// Maximum length in characters, if any
    pub max_len: Option<usize>,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input for a non-negative amount
    pub fn amount(label: impl Into<String>) -> Self {
        Self::new()
            .label(label)
            .placeholder("0.00")
            .kind(InputKind::Amount)
            .max_len(AMOUNT_MAX_LEN)
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the accepted characters
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Limit the content length
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of a character position
    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Whether `c` may be inserted given the current content
    pub fn accepts(&self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        if let Some(max) = self.max_len {
            if self.char_count() >= max {
                return false;
            }
        }
        match self.kind {
            InputKind::Text => true,
            InputKind::Amount => c.is_ascii_digit() || c == ',' || (c == '.' && !self.content.contains('.')),
        }
    }

    /// Insert a character at the cursor; returns whether it was accepted
    pub fn insert(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor; returns whether anything changed
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.content.remove(idx);
        true
    }

    /// Delete character at cursor; returns whether anything changed
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.content.remove(idx);
        true
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        } as u16;

        let input_start = area.x + label_width;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let showing_placeholder = self.content.is_empty() && !self.focused;
        let display_text = if showing_placeholder {
            self.placeholder.as_str()
        } else {
            self.content.as_str()
        };

        let text_style = if showing_placeholder {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        buf.set_string(input_start, area.y, display_text, text_style);

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "axb");
        assert_eq!(input.cursor, 2);

        assert!(input.backspace());
        assert_eq!(input.value(), "ab");
        input.move_start();
        assert!(!input.backspace());
    }

    #[test]
    fn test_amount_filter() {
        let mut input = TextInput::amount("Income");
        for c in "-12a,3.4.5".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12,3.45");
    }

    #[test]
    fn test_multibyte_content() {
        let mut input = TextInput::new().content("₹$");
        assert_eq!(input.cursor, 2);
        input.move_left();
        input.insert('€');
        assert_eq!(input.value(), "₹€$");
        assert!(input.delete());
        assert_eq!(input.value(), "₹€");
    }

    #[test]
    fn test_max_len() {
        let mut input = TextInput::new().max_len(2);
        assert!(input.insert('a'));
        assert!(input.insert('b'));
        assert!(!input.insert('c'));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_amount_length_is_capped() {
        let mut input = TextInput::amount("Income");
        for _ in 0..40 {
            input.insert('9');
        }
        assert_eq!(input.value().len(), AMOUNT_MAX_LEN);
    }
}
