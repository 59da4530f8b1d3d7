use crate::{
    config::Config,
    constants::UiText,
    entities::{TodoId, TodoList},
    icons::IconService,
    logger::Logger,
    storage::{ListStore, StoreError},
    ui::core::navigation::{NavigationState, Transition},
};

/// Everything one session owns: the list store, the navigation state and the
/// services the UI needs. Built once at startup and handed to the UI root.
pub struct AppContext {
    pub store: ListStore,
    pub navigation: NavigationState,
    pub config: Config,
    pub icons: IconService,
    pub logger: Logger,
}

impl AppContext {
    /// Seed the store and open the configured initial list, creating it if needed.
    pub fn new(config: Config, logger: Logger) -> Result<Self, StoreError> {
        let mut store = ListStore::seeded()?;
        let initial_list = config.ui.initial_list.clone();
        store.get_list(&initial_list, true)?;
        Self::with_store(store, &initial_list, config, logger)
    }

    /// Wrap an existing store; `active_list` must already exist.
    pub fn with_store(store: ListStore, active_list: &str, config: Config, logger: Logger) -> Result<Self, StoreError> {
        let navigation = NavigationState::new(&store, active_list)?;
        let icons = IconService::new(config.ui.icon_theme);
        Ok(Self {
            store,
            navigation,
            config,
            icons,
            logger,
        })
    }

    #[must_use]
    pub fn text(&self) -> &'static UiText {
        self.config.text()
    }

    pub fn active_list(&self) -> Result<&TodoList, StoreError> {
        self.store.list(self.navigation.active_list())
    }

    fn active_list_mut(&mut self) -> Result<&mut TodoList, StoreError> {
        self.store.get_list(self.navigation.active_list(), false)
    }

    /// Flip the completion flag of a todo in the active list.
    ///
    /// Returns `false` when the todo is gone.
    pub fn toggle_todo(&mut self, id: TodoId) -> Result<bool, StoreError> {
        let list = self.active_list_mut()?;
        let Some(todo) = list.get_one(id).cloned() else {
            return Ok(false);
        };
        let completed = !todo.is_completed();
        let toggled = list.update(todo.with_completed(completed)).is_some();
        if toggled {
            self.logger
                .log(format!("Todo {} marked {}", id, if completed { "done" } else { "open" }));
        }
        Ok(toggled)
    }

    /// Remove a todo from the active list.
    pub fn delete_todo(&mut self, id: TodoId) -> Result<bool, StoreError> {
        let removed = self.active_list_mut()?.remove(id);
        if removed {
            self.logger.log(format!("Todo {} deleted", id));
        }
        Ok(removed)
    }

    /// Register a new empty list and make it active.
    pub fn create_list(&mut self, name: &str) -> Result<Transition, StoreError> {
        let name = name.trim();
        self.store.add_list(name, [])?;
        self.logger.log(format!("List '{}' created", name));
        self.navigation.switch_list(&self.store, name)
    }

    /// Remove the active list and move to the first remaining one.
    ///
    /// Returns `None` when the active list is the only one, which is kept.
    pub fn remove_active_list(&mut self) -> Result<Option<TodoList>, StoreError> {
        let current = self.navigation.active_list().to_string();
        let Some(next) = self.store.list_names().find(|name| *name != current).map(str::to_string) else {
            return Ok(None);
        };

        if !self.navigation.switch_list(&self.store, &next)?.is_taken() {
            return Ok(None);
        }
        let removed = self.store.remove_list(&current);
        if removed.is_some() {
            self.logger.log(format!("List '{}' removed", current));
        }
        Ok(removed)
    }

    /// Make the next (or previous) list by name order active, wrapping around.
    pub fn cycle_list(&mut self, forward: bool) -> Result<Transition, StoreError> {
        let names: Vec<&str> = self.store.list_names().collect();
        let Some(current) = names.iter().position(|name| *name == self.navigation.active_list()) else {
            return Err(StoreError::ListNotFound(self.navigation.active_list().to_string()));
        };

        let len = names.len();
        let target = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let target = names[target].to_string();
        self.navigation.switch_list(&self.store, &target)
    }
}
