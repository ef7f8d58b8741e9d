use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{palette::tailwind::SLATE, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Clear, List, ListState, Paragraph, StatefulWidget, Widget},
};

use super::{centered_rect, DialogResult};
use crate::tasks::Priority;

pub struct PriorityDialog {
    selected: usize,
}

impl PriorityDialog {
    pub fn new(offered: Priority) -> Self {
        let selected = Priority::ALL
            .iter()
            .position(|p| *p == offered)
            .unwrap_or_default();
        Self { selected }
    }

    pub fn selected(&self) -> Priority {
        Priority::ALL[self.selected]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<Priority> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => DialogResult::Submit(self.selected()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                DialogResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(Priority::ALL.len() - 1);
                DialogResult::Continue
            }
            _ => DialogResult::Continue,
        }
    }
}

impl Widget for &PriorityDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(area, 30, 8);
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(Line::from(" Set Priority ".bold()).centered())
            .border_style(Style::new().fg(SLATE.c400));
        let inner = block.inner(area);
        block.render(area, buf);

        let [label, choices] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(inner);
        Paragraph::new("Select priority:").render(label, buf);

        let list = List::new(Priority::ALL.map(|p| p.name()))
            .highlight_style(Style::new().bg(SLATE.c800).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, choices, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offers_low_first() {
        assert_eq!(PriorityDialog::new(Priority::default()).selected(), Priority::Low);
    }

    #[test]
    fn moves_and_submits() {
        let mut dialog = PriorityDialog::new(Priority::Low);
        dialog.handle_key(KeyCode::Char('j').into());
        dialog.handle_key(KeyCode::Down.into());
        dialog.handle_key(KeyCode::Down.into());
        assert_eq!(dialog.selected(), Priority::High);
        dialog.handle_key(KeyCode::Up.into());
        assert!(matches!(
            dialog.handle_key(KeyCode::Enter.into()),
            DialogResult::Submit(Priority::Medium)
        ));
    }

    #[test]
    fn esc_cancels() {
        let mut dialog = PriorityDialog::new(Priority::Low);
        assert!(matches!(
            dialog.handle_key(KeyCode::Esc.into()),
            DialogResult::Cancel
        ));
    }
}
