// src/util/text.rs

/// Extract the first non-empty line of a text block, trimmed.
///
/// Drawer labels and detail headers only ever show a single line, so
/// multi-line titles collapse to their first line of actual text.
///
/// # Examples
///
/// ```
/// use sidenote::util::text::first_line;
///
/// assert_eq!(first_line("  Shopping list\nmilk\neggs"), "Shopping list");
/// ```
pub fn first_line(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Truncate a label to `max` characters, appending an ellipsis when the
/// input was longer. Counts `char`s, not bytes, so multi-byte titles do
/// not get split mid-character.
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }
    let mut truncated: String = label.chars().take(max.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_multiline_text_when_extracting_first_line_then_returns_only_first_line() {
        assert_eq!(first_line("First line\nSecond line"), "First line");
    }

    #[test]
    fn given_leading_blank_lines_when_extracting_first_line_then_skips_them() {
        assert_eq!(first_line("\n\n  Actual title\nrest"), "Actual title");
    }

    #[test]
    fn given_empty_text_when_extracting_first_line_then_returns_empty_string() {
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn given_whitespace_around_text_when_extracting_first_line_then_trims_whitespace() {
        assert_eq!(first_line("  padded  "), "padded");
    }

    #[test]
    fn given_short_label_when_truncating_then_returns_it_unchanged() {
        assert_eq!(truncate_label("short", 10), "short");
    }

    #[test]
    fn given_long_label_when_truncating_then_appends_ellipsis_within_budget() {
        let truncated = truncate_label("a very long note title", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn given_multibyte_label_when_truncating_then_counts_chars_not_bytes() {
        let truncated = truncate_label("заметка о покупках", 8);
        assert_eq!(truncated.chars().count(), 8);
        assert!(truncated.ends_with('…'));
    }
}
