use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{palette::tailwind::SLATE, Style, Stylize},
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

use super::{centered_rect, DialogResult};

/// Informational box used for command results.
pub struct MessageDialog {
    message: String,
}

impl MessageDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => DialogResult::Cancel,
            _ => DialogResult::Continue,
        }
    }
}

impl Widget for &MessageDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(area, 50, 7);
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(Line::from(" Todo List App ".bold()).centered())
            .border_style(Style::new().fg(SLATE.c400));
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, button] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        Paragraph::new(self.message.as_str())
            .wrap(Wrap { trim: true })
            .centered()
            .render(body, buf);
        Paragraph::new("[OK]".blue().bold())
            .centered()
            .render(button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_on_enter_esc_space() {
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')] {
            let mut dialog = MessageDialog::new("Saved");
            assert!(matches!(dialog.handle_key(code.into()), DialogResult::Cancel));
        }
    }

    #[test]
    fn other_keys_keep_it_open() {
        let mut dialog = MessageDialog::new("Saved");
        assert!(matches!(
            dialog.handle_key(KeyCode::Char('x').into()),
            DialogResult::Continue
        ));
        assert_eq!(dialog.message(), "Saved");
    }
}
