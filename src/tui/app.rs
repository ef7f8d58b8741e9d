use std::{cell::Cell, rc::Rc};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{Event, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{
        palette::{
            material::{BLUE, GREEN},
            tailwind::SLATE,
        },
        Color, Modifier, Style, Stylize,
    },
    symbols,
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell as TableCell, HighlightSpacing, Paragraph, Row, StatefulWidget,
        Table, TableState, Widget,
    },
    DefaultTerminal, Frame,
};
use tracing::debug;
use tui_input::{backend::crossterm::EventHandler, Input};

use super::{
    dialogs::{DialogResult, EditDialog, MessageDialog, PriorityDialog},
    text_input::cursor_spans,
};
use crate::{
    config::Config,
    error::Action,
    session::Session,
    tasks::{Category, Priority, Task},
};

const TODO_HEADER_STYLE: Style = Style::new().fg(SLATE.c100).bg(BLUE.c800);
const NORMAL_ROW_BG: Color = SLATE.c950;
const ALT_ROW_BG_COLOR: Color = SLATE.c900;
const SELECTED_STYLE: Style = Style::new().bg(SLATE.c800).add_modifier(Modifier::BOLD);
const TEXT_FG_COLOR: Color = SLATE.c200;
const FOCUSED_FG_COLOR: Color = GREEN.c500;
const PLACEHOLDER_FG_COLOR: Color = SLATE.c500;

const COLUMNS: [&str; 5] = ["Task Name", "Task Details", "Priority", "Category", "Due Date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Details,
    Category,
    Priority,
    DueDate,
}

impl FormField {
    const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Details,
        FormField::Category,
        FormField::Priority,
        FormField::DueDate,
    ];

    fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Task Name",
            FormField::Details => "Task Details",
            FormField::Category => "Category",
            FormField::Priority => "Priority",
            FormField::DueDate => "Due Date",
        }
    }

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or_default();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or_default();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Table,
    Form(FormField),
}

enum Modal {
    Edit { index: usize, dialog: EditDialog },
    Prioritize { index: usize, dialog: PriorityDialog },
    Message(MessageDialog),
}

pub struct App {
    session: Session,
    name_input: Input,
    details_input: Input,
    table: TableState,
    focus: Focus,
    modal: Option<Modal>,
    revision: Rc<Cell<u64>>,
    seen_revision: u64,
    exit: bool,
}

const fn alternate_colors(i: usize) -> Color {
    if i % 2 == 0 {
        NORMAL_ROW_BG
    } else {
        ALT_ROW_BG_COLOR
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut session = Session::new(config);
        let revision = Rc::new(Cell::new(0));
        let counter = Rc::clone(&revision);
        session.tasks.subscribe(move |event| {
            debug!(?event, "task list changed");
            counter.set(counter.get() + 1);
        });
        Self {
            session,
            name_input: Input::default(),
            details_input: Input::default(),
            table: TableState::default(),
            focus: Focus::Form(FormField::Name),
            modal: None,
            revision,
            seen_revision: 0,
            exit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        frame.render_widget(&mut *self, frame.area());
    }

    fn handle_events(&mut self) -> Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => Ok(()),
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.exit();
            return Ok(());
        }
        if let Some(modal) = self.modal.take() {
            self.handle_modal_key(modal, key_event);
        } else {
            match self.focus {
                Focus::Table => self.handle_table_key(key_event),
                Focus::Form(field) => self.handle_form_key(field, key_event),
            }
        }
        self.refresh_selection();
        Ok(())
    }

    fn handle_table_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') => self.exit(),
            KeyCode::Char('h') => self.select_none(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('g') => self.select_first(),
            KeyCode::Char('G') => self.select_last(),
            KeyCode::Char('a') | KeyCode::Tab => self.focus = Focus::Form(FormField::Name),
            KeyCode::Char('e') => self.open_edit(),
            KeyCode::Char('p') => self.open_prioritize(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('s') => self.save(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, field: FormField, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => self.focus = Focus::Table,
            KeyCode::Tab => self.focus = Focus::Form(field.next()),
            KeyCode::BackTab => self.focus = Focus::Form(field.previous()),
            KeyCode::Enter => self.add(),
            _ => match field {
                FormField::Name => {
                    self.name_input.handle_event(&Event::Key(key_event));
                    self.session.form.name = self.name_input.value().to_string();
                }
                FormField::Details => {
                    self.details_input.handle_event(&Event::Key(key_event));
                    self.session.form.details = self.details_input.value().to_string();
                }
                _ => self.edit_choice_field(field, key_event.code),
            },
        }
    }

    fn edit_choice_field(&mut self, field: FormField, code: KeyCode) {
        let form = &mut self.session.form;
        match (code, field) {
            (KeyCode::Backspace, FormField::Category) => form.category = None,
            (KeyCode::Backspace, FormField::Priority) => form.priority = None,
            (KeyCode::Backspace, FormField::DueDate) => form.due_date = None,
            (KeyCode::Left | KeyCode::Right, FormField::Category) => {
                form.category = Category::cycle(form.category, code == KeyCode::Right)
            }
            (KeyCode::Left | KeyCode::Right, FormField::Priority) => {
                form.priority = Priority::cycle(form.priority, code == KeyCode::Right)
            }
            (KeyCode::Left | KeyCode::Right, FormField::DueDate) => {
                form.due_date = step_date(form.due_date, code == KeyCode::Right)
            }
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, modal: Modal, key_event: KeyEvent) {
        match modal {
            Modal::Edit { index, mut dialog } => match dialog.handle_key(key_event) {
                DialogResult::Continue => self.modal = Some(Modal::Edit { index, dialog }),
                DialogResult::Cancel => {}
                DialogResult::Submit(name) => {
                    let result = self.session.edit(Some(index), |_| Some(name));
                    self.report(result);
                }
            },
            Modal::Prioritize { index, mut dialog } => match dialog.handle_key(key_event) {
                DialogResult::Continue => self.modal = Some(Modal::Prioritize { index, dialog }),
                DialogResult::Cancel => {}
                DialogResult::Submit(priority) => {
                    let result = self.session.prioritize(Some(index), |_| Some(priority));
                    self.report(result);
                }
            },
            Modal::Message(mut dialog) => {
                if let DialogResult::Continue = dialog.handle_key(key_event) {
                    self.modal = Some(Modal::Message(dialog));
                }
            }
        }
    }

    fn add(&mut self) {
        match self.session.add() {
            Ok(()) => {
                self.name_input.reset();
                self.details_input.reset();
                self.focus = Focus::Form(FormField::Name);
            }
            Err(err) => self.show_message(err.to_string()),
        }
    }

    fn open_edit(&mut self) {
        match self
            .session
            .require_selection(self.table.selected(), Action::Edit)
        {
            Ok(index) => {
                let current = self.session.tasks.get(index).map_or("", Task::name);
                let dialog = EditDialog::new(current);
                self.modal = Some(Modal::Edit { index, dialog });
            }
            Err(err) => self.show_message(err.to_string()),
        }
    }

    fn open_prioritize(&mut self) {
        match self
            .session
            .require_selection(self.table.selected(), Action::Prioritize)
        {
            Ok(index) => {
                let dialog = PriorityDialog::new(Priority::default());
                self.modal = Some(Modal::Prioritize { index, dialog });
            }
            Err(err) => self.show_message(err.to_string()),
        }
    }

    fn delete_selected(&mut self) {
        let result = self.session.delete(self.table.selected());
        self.report(result);
    }

    fn save(&mut self) {
        match self.session.save() {
            Ok(_) => self.show_message("Tasks saved successfully!"),
            Err(err) => self.show_message(err.to_string()),
        }
    }

    fn report(&mut self, result: crate::error::Result<()>) {
        if let Err(err) = result {
            self.show_message(err.to_string());
        }
    }

    fn show_message(&mut self, message: impl Into<String>) {
        let dialog = MessageDialog::new(message);
        debug!(message = dialog.message(), "showing message");
        self.modal = Some(Modal::Message(dialog));
    }

    /// Keeps the table selection inside the list after the store changed.
    fn refresh_selection(&mut self) {
        let revision = self.revision.get();
        if revision == self.seen_revision {
            return;
        }
        self.seen_revision = revision;
        let len = self.session.tasks.len();
        if let Some(selected) = self.table.selected() {
            let clamped = (len > 0).then(|| selected.min(len - 1));
            self.table.select(clamped);
        }
    }

    fn exit(&mut self) {
        self.exit = true;
    }

    fn select_none(&mut self) {
        self.table.select(None);
    }

    fn select_next(&mut self) {
        let len = self.session.tasks.len();
        if len > 0 {
            let next = self.table.selected().map_or(0, |i| (i + 1).min(len - 1));
            self.table.select(Some(next));
        }
    }

    fn select_previous(&mut self) {
        if !self.session.tasks.is_empty() {
            let previous = self.table.selected().map_or(0, |i| i.saturating_sub(1));
            self.table.select(Some(previous));
        }
    }

    fn select_first(&mut self) {
        if !self.session.tasks.is_empty() {
            self.table.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        let len = self.session.tasks.len();
        if len > 0 {
            self.table.select(Some(len - 1));
        }
    }

    fn render_header(area: Rect, buf: &mut Buffer) {
        Paragraph::new("Todo List App")
            .bold()
            .centered()
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let hint = match self.focus {
            Focus::Table => {
                "j/k move, h unselect, a add, e edit, p prioritize, d delete, s save, q quit"
            }
            Focus::Form(_) => "Tab next field, ←/→ choose, Enter add task, Esc go to table",
        };
        Paragraph::new(hint).centered().render(area, buf);
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let form = &self.session.form;
        let block = Block::new()
            .title(Line::raw("New Task").centered())
            .borders(Borders::TOP)
            .border_set(symbols::border::EMPTY)
            .border_style(TODO_HEADER_STYLE)
            .bg(NORMAL_ROW_BG);

        let lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|field| {
                let focused = self.focus == Focus::Form(*field);
                let value = match field {
                    FormField::Name => Some(form.name.clone()).filter(|s| !s.is_empty()),
                    FormField::Details => Some(form.details.clone()).filter(|s| !s.is_empty()),
                    FormField::Category => form.category.map(|c| c.to_string()),
                    FormField::Priority => form.priority.map(|p| p.to_string()),
                    FormField::DueDate => form.due_date.map(|d| d.to_string()),
                };
                let label_style = if focused {
                    Style::new().fg(FOCUSED_FG_COLOR).add_modifier(Modifier::BOLD)
                } else {
                    Style::new().fg(TEXT_FG_COLOR)
                };
                let mut spans = vec![
                    Span::styled(if focused { "> " } else { "  " }, label_style),
                    Span::styled(format!("{:<14}", field.label()), label_style),
                ];
                let text_input = match field {
                    FormField::Name => Some(&self.name_input),
                    FormField::Details => Some(&self.details_input),
                    _ => None,
                };
                match (value, text_input) {
                    (_, Some(input)) if focused => spans.extend(cursor_spans(
                        input,
                        Style::new().fg(TEXT_FG_COLOR),
                        Style::new().fg(NORMAL_ROW_BG).bg(FOCUSED_FG_COLOR),
                    )),
                    (Some(value), _) => spans.push(Span::styled(value, TEXT_FG_COLOR)),
                    (None, _) if !focused => {
                        spans.push(Span::styled(field.label(), PLACEHOLDER_FG_COLOR))
                    }
                    (None, _) => {}
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_table(&mut self, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .title(Line::raw("Tasks").centered())
            .borders(Borders::TOP)
            .border_set(symbols::border::EMPTY)
            .border_style(TODO_HEADER_STYLE)
            .bg(NORMAL_ROW_BG);

        let header = Row::new(COLUMNS)
            .style(Style::new().fg(TEXT_FG_COLOR).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = self
            .session
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| Row::from(task).bg(alternate_colors(i)))
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(25),
                Constraint::Percentage(33),
                Constraint::Percentage(12),
                Constraint::Percentage(14),
                Constraint::Percentage(16),
            ],
        )
        .header(header)
        .block(block)
        .highlight_style(SELECTED_STYLE)
        .highlight_symbol(">")
        .highlight_spacing(HighlightSpacing::Always);

        // Both `Widget` and `StatefulWidget` provide `render`.
        StatefulWidget::render(table, area, buf, &mut self.table);
    }

    fn render_modal(&self, area: Rect, buf: &mut Buffer) {
        match &self.modal {
            Some(Modal::Edit { dialog, .. }) => dialog.render(area, buf),
            Some(Modal::Prioritize { dialog, .. }) => dialog.render(area, buf),
            Some(Modal::Message(dialog)) => dialog.render(area, buf),
            None => {}
        }
    }
}

fn step_date(current: Option<NaiveDate>, forward: bool) -> Option<NaiveDate> {
    let Some(date) = current else {
        return Some(Local::now().date_naive());
    };
    let stepped = if forward {
        date.succ_opt()
    } else {
        date.pred_opt()
    };
    stepped.or(Some(date))
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [header_area, form_area, table_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        App::render_header(header_area, buf);
        self.render_form(form_area, buf);
        self.render_table(table_area, buf);
        self.render_footer(footer_area, buf);
        self.render_modal(area, buf);
    }
}

impl From<&Task> for Row<'_> {
    fn from(task: &Task) -> Self {
        let category = match task.category() {
            Some(category) => TableCell::from(category.name()).fg(category.color()),
            None => TableCell::from(""),
        };
        Row::new(vec![
            TableCell::from(task.name().to_string()),
            TableCell::from(task.details().to_string()),
            TableCell::from(task.priority().map_or("", |p| p.name())),
            category,
            TableCell::from(task.due_date().map(|d| d.to_string()).unwrap_or_default()),
        ])
        .fg(TEXT_FG_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskForm;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        App::new(Config::new(dir.path().join("ToDoList.txt")))
    }

    fn type_text(app: &mut App, text: &str) -> Result<()> {
        for c in text.chars() {
            app.handle_key_event(KeyCode::Char(c).into())?;
        }
        Ok(())
    }

    fn add_task(app: &mut App, name: &str) -> Result<()> {
        app.focus = Focus::Form(FormField::Name);
        type_text(app, name)?;
        app.handle_key_event(KeyCode::Enter.into())
    }

    fn message(app: &App) -> Option<&str> {
        match &app.modal {
            Some(Modal::Message(dialog)) => Some(dialog.message()),
            _ => None,
        }
    }

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        screen_lines(app, width, height).concat()
    }

    fn screen_lines(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        app.render(buf.area, &mut buf);
        buf.content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn row_words(lines: &[String], name: &str) -> Vec<String> {
        lines
            .iter()
            .find(|line| line.contains(name))
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn render() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        add_task(&mut app, "Buy milk")?;

        let text = screen(&mut app, 100, 20);
        assert!(text.contains("Todo List App"));
        for column in COLUMNS {
            assert!(text.contains(column), "missing column {column}");
        }
        assert!(text.contains("Buy milk"));
        Ok(())
    }

    #[test]
    fn form_fills_every_field_then_clears() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        type_text(&mut app, "Pay rent")?;
        app.handle_key_event(KeyCode::Tab.into())?;
        type_text(&mut app, "by transfer")?;
        app.handle_key_event(KeyCode::Tab.into())?;
        app.handle_key_event(KeyCode::Right.into())?;
        app.handle_key_event(KeyCode::Right.into())?;
        app.handle_key_event(KeyCode::Tab.into())?;
        app.handle_key_event(KeyCode::Left.into())?;
        app.handle_key_event(KeyCode::Tab.into())?;
        app.handle_key_event(KeyCode::Right.into())?;
        assert_eq!(app.focus, Focus::Form(FormField::DueDate));
        assert!(app.session.form.due_date.is_some());

        app.handle_key_event(KeyCode::Enter.into())?;

        let task = app.session.tasks.get(0).cloned().unwrap();
        assert_eq!(task.name(), "Pay rent");
        assert_eq!(task.details(), "by transfer");
        assert_eq!(task.category(), Some(Category::Work));
        assert_eq!(task.priority(), Some(Priority::High));
        assert!(task.due_date().is_some());
        assert!(app.session.form.is_clear());
        assert_eq!(app.name_input.value(), "");
        assert_eq!(app.details_input.value(), "");
        assert_eq!(app.focus, Focus::Form(FormField::Name));
        Ok(())
    }

    #[test]
    fn unset_cells_render_blank() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        add_task(&mut app, "Plain")?;
        app.session.form = TaskForm {
            name: "Dated".to_string(),
            details: String::new(),
            category: Some(Category::Work),
            priority: Some(Priority::High),
            due_date: NaiveDate::from_ymd_opt(2024, 5, 17),
        };
        app.session.add()?;

        let lines = screen_lines(&mut app, 100, 20);
        assert_eq!(row_words(&lines, "Plain"), ["Plain"]);
        assert_eq!(
            row_words(&lines, "Dated"),
            ["Dated", "High", "Work", "2024-05-17"]
        );
        Ok(())
    }

    #[test]
    fn control_keys_are_not_typed() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        type_text(&mut app, "milk")?;
        app.handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))?;
        app.handle_key_event(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL))?;
        assert_eq!(app.session.form.name, "milk");

        app.handle_key_event(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL))?;
        assert_eq!(app.session.form.name, "");
        assert!(!app.exit);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))?;
        assert!(app.exit);
        assert_eq!(app.session.form.name, "");
        Ok(())
    }

    #[test]
    fn name_field_supports_cursor_editing() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        type_text(&mut app, "bred")?;
        app.handle_key_event(KeyCode::Left.into())?;
        type_text(&mut app, "a")?;
        app.handle_key_event(KeyCode::Home.into())?;
        app.handle_key_event(KeyCode::Delete.into())?;
        assert_eq!(app.session.form.name, "read");
        Ok(())
    }

    #[test]
    fn empty_name_shows_message() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        app.handle_key_event(KeyCode::Enter.into())?;
        assert_eq!(message(&app), Some("Task name cannot be empty!"));
        assert!(app.session.tasks.is_empty());

        app.handle_key_event(KeyCode::Enter.into())?;
        assert!(app.modal.is_none());
        Ok(())
    }

    #[test]
    fn handle_key_event() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        add_task(&mut app, "a")?;
        add_task(&mut app, "b")?;
        app.handle_key_event(KeyCode::Esc.into())?;
        assert_eq!(app.focus, Focus::Table);

        app.handle_key_event(KeyCode::Char('j').into())?;
        app.handle_key_event(KeyCode::Char('j').into())?;
        app.handle_key_event(KeyCode::Char('j').into())?;
        assert_eq!(app.table.selected(), Some(1));

        app.handle_key_event(KeyCode::Char('k').into())?;
        assert_eq!(app.table.selected(), Some(0));

        app.handle_key_event(KeyCode::Char('G').into())?;
        assert_eq!(app.table.selected(), Some(1));
        app.handle_key_event(KeyCode::Char('h').into())?;
        assert_eq!(app.table.selected(), None);

        app.handle_key_event(KeyCode::Char('q').into())?;
        assert!(app.exit);
        Ok(())
    }

    #[test]
    fn commands_without_selection_report() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        add_task(&mut app, "a")?;
        app.handle_key_event(KeyCode::Esc.into())?;

        for (key, text) in [
            ('e', "Please select a task to edit."),
            ('p', "Please select a task to prioritize."),
            ('d', "Please select a task to delete."),
        ] {
            app.handle_key_event(KeyCode::Char(key).into())?;
            assert_eq!(message(&app), Some(text));
            app.handle_key_event(KeyCode::Esc.into())?;
        }
        assert_eq!(app.session.tasks.len(), 1);
        Ok(())
    }

    #[test]
    fn edit_and_prioritize_through_dialogs() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        add_task(&mut app, "ab")?;
        app.handle_key_event(KeyCode::Esc.into())?;
        app.handle_key_event(KeyCode::Char('g').into())?;

        app.handle_key_event(KeyCode::Char('e').into())?;
        app.handle_key_event(KeyCode::Backspace.into())?;
        type_text(&mut app, "c")?;
        app.handle_key_event(KeyCode::Enter.into())?;
        assert!(app.modal.is_none());
        assert_eq!(app.session.tasks.get(0).map(Task::name), Some("ac"));

        app.handle_key_event(KeyCode::Char('e').into())?;
        type_text(&mut app, "zzz")?;
        app.handle_key_event(KeyCode::Esc.into())?;
        assert_eq!(app.session.tasks.get(0).map(Task::name), Some("ac"));

        app.handle_key_event(KeyCode::Char('p').into())?;
        app.handle_key_event(KeyCode::Down.into())?;
        app.handle_key_event(KeyCode::Enter.into())?;
        assert_eq!(
            app.session.tasks.get(0).and_then(Task::priority),
            Some(Priority::Medium)
        );
        Ok(())
    }

    #[test]
    fn delete_keeps_selection_in_range() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        add_task(&mut app, "a")?;
        add_task(&mut app, "b")?;
        app.handle_key_event(KeyCode::Esc.into())?;
        app.handle_key_event(KeyCode::Char('G').into())?;

        app.handle_key_event(KeyCode::Char('d').into())?;
        assert_eq!(app.session.tasks.names().collect::<Vec<_>>(), ["a"]);
        assert_eq!(app.table.selected(), Some(0));

        app.handle_key_event(KeyCode::Char('d').into())?;
        assert!(app.session.tasks.is_empty());
        assert_eq!(app.table.selected(), None);
        Ok(())
    }

    #[test]
    fn save_reports_result() -> Result<()> {
        let dir = TempDir::new()?;
        let mut app = app_in(&dir);
        add_task(&mut app, "A")?;
        add_task(&mut app, "B")?;
        app.handle_key_event(KeyCode::Esc.into())?;
        app.handle_key_event(KeyCode::Char('s').into())?;
        assert_eq!(message(&app), Some("Tasks saved successfully!"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("ToDoList.txt"))?,
            "A\nB\n"
        );

        let mut broken = App::new(Config::new(dir.path().join("no/such/dir.txt")));
        broken.focus = Focus::Table;
        broken.handle_key_event(KeyCode::Char('s').into())?;
        assert!(message(&broken).is_some_and(|m| m.starts_with("Error saving tasks: ")));
        Ok(())
    }

    #[test]
    fn step_date_starts_today_and_moves_by_day() {
        let today = Local::now().date_naive();
        assert_eq!(step_date(None, true), Some(today));
        let day = NaiveDate::from_ymd_opt(2024, 2, 28);
        assert_eq!(step_date(day, true), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(step_date(day, false), NaiveDate::from_ymd_opt(2024, 2, 27));
    }
}
