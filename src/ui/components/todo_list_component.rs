use crate::config::DisplayConfig;
use crate::constants::{UiText, GERMAN};
use crate::entities::{Todo, TodoList};
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Scrollable view over the active list's todos.
///
/// Holds a snapshot of the list and refreshes it only when the list name or
/// its revision changes.
pub struct TodoListComponent {
    pub todos: Vec<Todo>,
    pub selected_index: usize,
    pub list_state: ListState,
    snapshot_of: Option<(String, u64)>,
    icons: IconService,
    display: DisplayConfig,
    text: &'static UiText,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new(IconService::default(), DisplayConfig::default(), &GERMAN)
    }
}

impl TodoListComponent {
    pub fn new(icons: IconService, display: DisplayConfig, text: &'static UiText) -> Self {
        Self {
            todos: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            snapshot_of: None,
            icons,
            display,
            text,
        }
    }

    /// Refresh the snapshot from `list` if it changed. Returns whether it did.
    pub fn update_data(&mut self, list: &TodoList) -> bool {
        let current = (list.name().to_string(), list.revision());
        if self.snapshot_of.as_ref() == Some(&current) {
            return false;
        }

        let switched_list = self
            .snapshot_of
            .as_ref()
            .map_or(true, |(name, _)| name != list.name());
        if switched_list {
            self.selected_index = 0;
        }

        self.todos = list.get_all().to_vec();
        self.snapshot_of = Some(current);
        self.update_list_state();
        true
    }

    #[must_use]
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todos.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.todos.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.todos.len() {
                self.selected_index = self.todos.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn create_todo_item(&self, todo: &Todo) -> ListItem<'static> {
        let title_style = if todo.is_completed() {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };

        let mut first_line = vec![
            Span::styled(
                format!("{} ", self.icons.checkbox(todo.is_completed())),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(todo.title().to_string(), title_style),
        ];

        if self.display.show_due_dates {
            let due = datetime::format_relative_date(
                todo.due_date(),
                datetime::today(),
                self.text,
                &self.display.date_format,
            );
            let due_color = if !todo.is_completed() && todo.due_date() < datetime::today() {
                Color::Red
            } else {
                Color::Yellow
            };
            first_line.push(Span::styled(
                format!("  {} {}", self.icons.due_date(), due),
                Style::default().fg(due_color),
            ));
        }

        let mut lines = vec![Line::from(first_line)];
        if self.display.show_notes && !todo.notes().is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", todo.notes()),
                Style::default().fg(Color::Gray),
            )));
        }

        ListItem::new(lines)
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTodo,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTodo,
            KeyCode::Char('a') => Action::OpenCreateForm,
            KeyCode::Enter | KeyCode::Char('e') => self
                .selected_todo()
                .map_or(Action::None, |todo| Action::OpenEditForm(todo.id())),
            KeyCode::Char(' ') => self
                .selected_todo()
                .map_or(Action::None, |todo| Action::ToggleTodo(todo.id())),
            KeyCode::Char('d') => self
                .selected_todo()
                .map_or(Action::None, |todo| Action::DeleteTodo(todo.id())),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTodo => {
                if !self.todos.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.todos.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTodo => {
                if !self.todos.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.todos.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default().borders(Borders::ALL);

        if self.todos.is_empty() {
            let empty_list = List::new(vec![ListItem::new(Span::styled(
                self.text.empty_list,
                Style::default().fg(Color::Gray),
            ))])
            .block(block);
            f.render_widget(empty_list, rect);
            return;
        }

        let items: Vec<ListItem> = self.todos.iter().map(|todo| self.create_todo_item(todo)).collect();
        let todos_list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(todos_list, rect, &mut self.list_state);
    }
}
