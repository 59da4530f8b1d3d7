//! Modal dialog shown on top of the current screen.
//!
//! Only one dialog is visible at a time. While visible it receives every key
//! event before the screens do.

use crate::constants::{UiText, GERMAN, HELP_TEXT};
use crate::icons::IconService;
use crate::ui::components::dialogs::{list_dialogs, system_dialogs};
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input: TextInput,
    pub logs: Vec<String>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    icons: IconService,
    text: &'static UiText,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(IconService::default(), &GERMAN)
    }
}

impl DialogComponent {
    pub fn new(icons: IconService, text: &'static UiText) -> Self {
        Self {
            dialog_type: None,
            input: TextInput::default(),
            logs: Vec::new(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            icons,
            text,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Replace the log lines shown by the logs dialog
    pub fn set_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn open(&mut self, dialog_type: DialogType) {
        self.input.clear();
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
        self.dialog_type = Some(dialog_type);
    }

    fn close(&mut self) {
        self.dialog_type = None;
        self.input.clear();
    }

    fn handle_list_creation_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => {
                let name = self.input.value().trim().to_string();
                if name.is_empty() {
                    return Action::None;
                }
                self.close();
                Action::CreateList(name)
            }
            _ => {
                self.input.handle_key(key);
                Action::None
            }
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::End => {
                self.scroll_offset = usize::MAX;
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::ListCreation) => self.handle_list_creation_key(key),
            Some(DialogType::Error(_)) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Help | DialogType::Logs) => self.handle_scroll_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.open(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.close();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::ListCreation => {
                list_dialogs::render_list_creation_dialog(f, rect, &self.icons, self.text, &self.input);
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, self.text, &message);
            }
            DialogType::Help => {
                let lines: Vec<String> = HELP_TEXT.trim().lines().map(str::to_string).collect();
                let title = format!("{} {}", self.icons.info(), self.text.help_title);
                self.scroll_offset = system_dialogs::render_scrollable_dialog(
                    f,
                    rect,
                    title,
                    &lines,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            DialogType::Logs => {
                let title = format!("{} {} ({})", self.icons.info(), self.text.logs_title, self.logs.len());
                self.scroll_offset = system_dialogs::render_scrollable_dialog(
                    f,
                    rect,
                    title,
                    &self.logs,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
        }
    }
}
