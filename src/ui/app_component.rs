use crate::constants::UiText;
use crate::entities::Todo;
use crate::storage::StoreError;
use crate::ui::components::{DialogComponent, HeaderBar, StatusBar, TodoFormComponent, TodoListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    AppContext, Component, Screen, Transition,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Root of the component tree.
///
/// Routes key events to the dialog or the current screen, applies the
/// resulting actions to the [`AppContext`] and draws header, body and status
/// bar for the screen the navigation state is on.
pub struct AppComponent {
    context: AppContext,

    // Component composition
    todo_list: TodoListComponent,
    form: TodoFormComponent,
    dialog: DialogComponent,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(context: AppContext) -> Self {
        let text = context.text();
        let icons = context.icons.clone();
        let display = context.config.display.clone();

        let mut app = Self {
            todo_list: TodoListComponent::new(icons.clone(), display.clone(), text),
            form: TodoFormComponent::new(icons.clone(), display, text),
            dialog: DialogComponent::new(icons, text),
            context,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn form(&self) -> &TodoFormComponent {
        &self.form
    }

    pub fn todo_list(&self) -> &TodoListComponent {
        &self.todo_list
    }

    /// Refresh the list snapshot when the active list or its revision changed
    fn sync_component_data(&mut self) {
        match self.context.active_list() {
            Ok(list) => {
                if self.todo_list.update_data(list) {
                    log::debug!("AppComponent: list '{}' at revision {}", list.name(), list.revision());
                }
            }
            Err(e) => log::error!("AppComponent: active list unavailable: {}", e),
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.context.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Tab => Action::NextList,
            KeyCode::BackTab => Action::PreviousList,
            KeyCode::Char('N') => Action::ShowDialog(DialogType::ListCreation),
            KeyCode::Char('D') => Action::RemoveActiveList,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => {
                self.dialog.set_logs(self.context.logger.get_logs());
                Action::ShowDialog(DialogType::Logs)
            }
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.context.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if *self.context.navigation.screen() != Screen::ListView {
            return self.form.handle_key_events(key);
        }

        let list_action = self.todo_list.handle_key_events(key);
        if list_action == Action::None {
            self.handle_global_key(key)
        } else {
            list_action
        }
    }

    /// Apply an app-level action. Returns a follow-up action, if any.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match self.apply_action(action) {
            Ok(next) => next,
            Err(e) => {
                self.context.logger.log(format!("Error: {}", e));
                Action::ShowDialog(DialogType::Error(store_error_message(self.context.text(), &e)))
            }
        }
    }

    fn apply_action(&mut self, action: Action) -> Result<Action, StoreError> {
        let ctx = &mut self.context;
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::OpenCreateForm => {
                if ctx.navigation.open_create_form().is_taken() {
                    self.form.load(&Todo::default());
                }
            }
            Action::OpenEditForm(id) => {
                if ctx.navigation.open_edit_form(&ctx.store, id)?.is_taken() {
                    if let Screen::EditForm { todo } = ctx.navigation.screen() {
                        self.form.load(todo);
                    }
                }
            }
            Action::CancelForm => {
                ctx.navigation.cancel();
            }
            Action::SubmitTodo(todo) => {
                let title = todo.title().to_string();
                let transition = if *ctx.navigation.screen() == Screen::CreateForm {
                    ctx.navigation.submit_create(&mut ctx.store, todo)?
                } else if matches!(ctx.navigation.screen(), Screen::EditForm { .. }) {
                    ctx.navigation.submit_edit(&mut ctx.store, todo)?
                } else {
                    Transition::Ignored
                };
                if transition.is_taken() {
                    ctx.logger.log(format!("Todo '{}' saved to '{}'", title, ctx.navigation.active_list()));
                }
            }
            Action::NextList => {
                ctx.cycle_list(true)?;
            }
            Action::PreviousList => {
                ctx.cycle_list(false)?;
            }
            Action::ToggleTodo(id) => {
                ctx.toggle_todo(id)?;
            }
            Action::DeleteTodo(id) => {
                ctx.delete_todo(id)?;
            }
            Action::CreateList(name) => {
                ctx.create_list(&name)?;
            }
            Action::RemoveActiveList => {
                if ctx.remove_active_list()?.is_none() {
                    return Ok(Action::ShowDialog(DialogType::Error(ctx.text().last_list_error.to_string())));
                }
            }
            _ => {}
        }
        Ok(Action::None)
    }

    /// Run one action through the component hierarchy until it is consumed
    fn dispatch(&mut self, mut action: Action) {
        while action != Action::None {
            action = self.dialog.update(action);
            action = self.todo_list.update(action);
            action = self.handle_app_action(action);
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }

    /// Position of the active list among all lists, for the status bar
    fn list_position(&self) -> Option<(usize, usize)> {
        let active = self.context.navigation.active_list();
        let index = self.context.store.list_names().position(|name| name == active)?;
        Some((index, self.context.store.len()))
    }
}

/// Localised text for a store error shown in the error dialog
fn store_error_message(text: &UiText, error: &StoreError) -> String {
    match error {
        StoreError::DuplicateListName(name) => text.duplicate_list_error.replace("{}", name),
        StoreError::ListNotFound(name) => text.list_not_found_error.replace("{}", name),
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.todo_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);
        let text = self.context.text();

        let header = self.context.navigation.header(text);
        HeaderBar::render(f, areas.header, &header, &self.context.icons, text);

        let hints = match self.context.navigation.screen() {
            Screen::ListView => {
                self.todo_list.render(f, areas.body);
                text.list_hints
            }
            Screen::CreateForm | Screen::EditForm { .. } => {
                self.form.render(f, areas.body);
                text.form_hints
            }
        };

        let list_position = self.list_position();
        StatusBar::render(f, areas.status, self.context.navigation.screen(), hints, list_position);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
