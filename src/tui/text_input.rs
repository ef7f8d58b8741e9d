//! Cursor rendering shared by the form fields and the edit prompt.

use ratatui::{style::Style, text::Span};
use tui_input::Input;

/// Splits the value around the cursor and draws the cursor cell in
/// `cursor_style`. Past the end of the value the cursor is a blank cell.
pub fn cursor_spans(input: &Input, style: Style, cursor_style: Style) -> Vec<Span<'static>> {
    let value = input.value();
    let cursor = input.visual_cursor();

    let before: String = value.chars().take(cursor).collect();
    let at: String = value
        .chars()
        .nth(cursor)
        .map_or_else(|| " ".to_string(), |c| c.to_string());
    let after: String = value.chars().skip(cursor + 1).collect();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, style));
    }
    spans.push(Span::styled(at, cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn cursor_at_end_is_blank_cell() {
        let input = Input::new("milk".to_string());
        let spans = cursor_spans(&input, Style::new(), Style::new());
        assert_eq!(texts(&spans), ["milk", " "]);
    }

    #[test]
    fn cursor_inside_value_splits_it() {
        let input = Input::new("milk".to_string()).with_cursor(1);
        let spans = cursor_spans(&input, Style::new(), Style::new());
        assert_eq!(texts(&spans), ["m", "i", "lk"]);
    }
}
