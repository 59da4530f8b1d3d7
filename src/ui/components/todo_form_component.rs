//! Form used by both the create and the edit screen.
//!
//! The form edits a working copy of a [`Todo`] and only emits
//! [`Action::SubmitTodo`] once the title is valid. The submitted todo keeps the
//! id of the todo the form was loaded with.

use crate::config::DisplayConfig;
use crate::constants::{UiText, GERMAN};
use crate::entities::{is_valid_title, Todo};
use crate::icons::IconService;
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Notes,
    DueDate,
    Completed,
}

impl FormField {
    const ORDER: [FormField; 4] = [Self::Title, Self::Notes, Self::DueDate, Self::Completed];

    fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct TodoFormComponent {
    base: Todo,
    pub title: TextInput,
    pub notes: TextInput,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub focus: FormField,
    icons: IconService,
    display: DisplayConfig,
    text: &'static UiText,
}

impl Default for TodoFormComponent {
    fn default() -> Self {
        Self::new(IconService::default(), DisplayConfig::default(), &GERMAN)
    }
}

impl TodoFormComponent {
    pub fn new(icons: IconService, display: DisplayConfig, text: &'static UiText) -> Self {
        let base = Todo::default();
        Self {
            title: TextInput::new(base.title()),
            notes: TextInput::new(base.notes()),
            due_date: base.due_date(),
            completed: base.is_completed(),
            base,
            focus: FormField::Title,
            icons,
            display,
            text,
        }
    }

    /// Reset every field from `todo` and focus the title.
    pub fn load(&mut self, todo: &Todo) {
        self.title.set(todo.title());
        self.notes.set(todo.notes());
        self.due_date = todo.due_date();
        self.completed = todo.is_completed();
        self.focus = FormField::Title;
        self.base = todo.clone();
    }

    #[must_use]
    pub fn is_title_valid(&self) -> bool {
        is_valid_title(self.title.value())
    }

    /// Todo built from the current field values, with the loaded todo's id.
    ///
    /// The title is kept exactly as typed; trimming only applies to validation.
    #[must_use]
    pub fn build_todo(&self) -> Todo {
        self.base
            .clone()
            .with_title(self.title.value())
            .with_notes(self.notes.value())
            .with_due_date(self.due_date)
            .with_completed(self.completed)
    }

    fn handle_date_key(&mut self, key: KeyEvent) {
        self.due_date = match key.code {
            KeyCode::Left | KeyCode::Char('-') => datetime::shift_days(self.due_date, -1),
            KeyCode::Right | KeyCode::Char('+') => datetime::shift_days(self.due_date, 1),
            KeyCode::Up => datetime::shift_days(self.due_date, -7),
            KeyCode::Down => datetime::shift_days(self.due_date, 7),
            KeyCode::Char('t') => datetime::today(),
            _ => self.due_date,
        };
    }

    fn field_block(&self, field: FormField, label: &str, error: bool) -> Block<'static> {
        let color = if error {
            Color::Red
        } else if self.focus == field {
            Color::Cyan
        } else {
            Color::Gray
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", label))
            .title_style(Style::default().fg(Color::White))
            .style(Style::default().fg(color))
    }

    fn input_text(&self, field: FormField, input: &TextInput) -> String {
        if self.focus == field {
            input.display_with_cursor()
        } else {
            input.value().to_string()
        }
    }
}

impl Component for TodoFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => return Action::CancelForm,
            KeyCode::Enter => {
                if self.is_title_valid() {
                    return Action::SubmitTodo(self.build_todo());
                }
                log::debug!("Form: submit blocked, title '{}' is invalid", self.title.value());
                return Action::None;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            FormField::Title => {
                self.title.handle_key(key);
            }
            FormField::Notes => {
                self.notes.handle_key(key);
            }
            FormField::DueDate => self.handle_date_key(key),
            FormField::Completed => {
                if key.code == KeyCode::Char(' ') {
                    self.completed = !self.completed;
                }
            }
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Title error
                Constraint::Length(3), // Notes
                Constraint::Length(3), // Due date
                Constraint::Length(1), // Completed
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Save
                Constraint::Min(0),
            ])
            .split(rect);

        let title_valid = self.is_title_valid();

        let title = Paragraph::new(self.input_text(FormField::Title, &self.title))
            .block(self.field_block(FormField::Title, self.text.title_label, !title_valid))
            .style(Style::default().fg(Color::White));
        f.render_widget(title, chunks[0]);

        if !title_valid {
            let error = Paragraph::new(Span::styled(
                format!("{} {}", self.icons.error(), self.text.title_error),
                Style::default().fg(Color::Red),
            ));
            f.render_widget(error, chunks[1]);
        }

        let notes = Paragraph::new(self.input_text(FormField::Notes, &self.notes))
            .block(self.field_block(FormField::Notes, self.text.notes_label, false))
            .style(Style::default().fg(Color::White));
        f.render_widget(notes, chunks[2]);

        let due_text = format!(
            "{} {}  ({})",
            self.icons.due_date(),
            self.due_date.format(&self.display.date_format),
            datetime::format_relative_date(self.due_date, datetime::today(), self.text, &self.display.date_format)
        );
        let due = Paragraph::new(due_text)
            .block(self.field_block(FormField::DueDate, self.text.due_label, false))
            .style(Style::default().fg(Color::White));
        f.render_widget(due, chunks[3]);

        let completed_style = if self.focus == FormField::Completed {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let completed = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", self.icons.checkbox(self.completed)), completed_style),
            Span::styled(self.text.completed_label, completed_style),
        ]));
        f.render_widget(completed, chunks[4]);

        let save_style = if title_valid {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let save = Paragraph::new(Span::styled(format!("[ {} ]", self.text.save_label), save_style));
        f.render_widget(save, chunks[6]);
    }
}
