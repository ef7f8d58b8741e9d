use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{palette::tailwind::SLATE, Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget},
};
use tui_input::{backend::crossterm::EventHandler, Input};

use super::{centered_rect, DialogResult};
use crate::tui::text_input::cursor_spans;

/// Text prompt for a replacement task name, pre-filled with the current one.
pub struct EditDialog {
    input: Input,
}

impl EditDialog {
    pub fn new(current: &str) -> Self {
        Self {
            input: Input::new(current.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<String> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => DialogResult::Submit(self.value().to_string()),
            _ => {
                self.input.handle_event(&Event::Key(key));
                DialogResult::Continue
            }
        }
    }
}

impl Widget for &EditDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(area, 50, 6);
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(Line::from(" Edit Task ".bold()).centered())
            .border_style(Style::new().fg(SLATE.c400));
        let inner = block.inner(area);
        block.render(area, buf);

        let [label, input, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new("Enter new task name:").render(label, buf);
        let style = Style::new().fg(Color::Yellow);
        Paragraph::new(Line::from(cursor_spans(
            &self.input,
            style,
            style.add_modifier(Modifier::REVERSED),
        )))
        .render(input, buf);
        Paragraph::new(Line::from(vec![
            "<Enter>".blue().bold(),
            " confirm ".into(),
            "<Esc>".blue().bold(),
            " cancel".into(),
        ]))
        .render(hint, buf);
    }
}
