//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the text report and the TUI charts.

use crate::models::Notice;

/// Format a percentage with one decimal place, as chart labels show it
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a notice as a single line with its marker ("[!] ...")
pub fn format_notice(notice: &Notice) -> String {
    format!("[{}] {}", notice.level.icon(), notice.message)
}

/// Format a section title followed by a separator
pub fn format_section(title: &str, width: usize) -> String {
    format!("{}\n{}\n", title, separator(width))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Left-align text in a field of given width, counting characters
pub fn left_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

/// Right-align text in a field of given width, counting characters
///
/// Currency symbols such as `₹` are multi-byte, so `{:>width$}` on the byte
/// length would misalign columns.
pub fn right_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(57.142857), "57.1%");
        assert_eq!(format_percentage(100.0), "100.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn test_format_notice() {
        assert_eq!(format_notice(&Notice::warning("Careful")), "[!] Careful");
    }

    #[test]
    fn test_alignment_counts_chars() {
        assert_eq!(right_align("₹5", 4), "  ₹5");
        assert_eq!(left_align("abc", 5), "abc  ");
        assert_eq!(right_align("toolong", 3), "toolong");
    }
}
