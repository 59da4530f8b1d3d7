use std::collections::BTreeMap;

use crate::constants::{DEFAULT_LIST_NAME, SEED_TODO_NOTES, SEED_TODO_TITLE};
use crate::entities::{Todo, TodoList};

/// Failures raised by list-level store operations.
///
/// Item-level operations never fail: a missing todo is reported through
/// `Option`/`bool` results on [`TodoList`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("List with name {0} already exists")]
    DuplicateListName(String),

    #[error("List with name {0} does not exist")]
    ListNotFound(String),
}

/// Registry of todo lists keyed by their case-sensitive name.
#[derive(Debug, Default)]
pub struct ListStore {
    lists: BTreeMap<String, TodoList>,
}

impl ListStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the `"default"` list and one sample todo.
    pub fn seeded() -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.add_list(
            DEFAULT_LIST_NAME,
            [Todo::new(SEED_TODO_TITLE).with_notes(SEED_TODO_NOTES)],
        )?;
        Ok(store)
    }

    /// Register a new list seeded with `todos`.
    pub fn add_list(
        &mut self,
        name: impl Into<String>,
        todos: impl IntoIterator<Item = Todo>,
    ) -> Result<&mut TodoList, StoreError> {
        let name = name.into();
        if self.lists.contains_key(&name) {
            return Err(StoreError::DuplicateListName(name));
        }

        log::info!("Store: adding list '{}'", name);
        let list = TodoList::new(name.clone(), todos);
        Ok(self.lists.entry(name).or_insert(list))
    }

    /// Look up a list, optionally creating an empty one when it is absent.
    pub fn get_list(&mut self, name: &str, create_if_not_exists: bool) -> Result<&mut TodoList, StoreError> {
        if create_if_not_exists {
            return Ok(self.lists.entry(name.to_string()).or_insert_with(|| {
                log::info!("Store: creating missing list '{}'", name);
                TodoList::new(name, [])
            }));
        }

        self.lists
            .get_mut(name)
            .ok_or_else(|| StoreError::ListNotFound(name.to_string()))
    }

    /// Read-only lookup with the same strict semantics as [`ListStore::get_list`].
    pub fn list(&self, name: &str) -> Result<&TodoList, StoreError> {
        self.lists
            .get(name)
            .ok_or_else(|| StoreError::ListNotFound(name.to_string()))
    }

    /// Remove and return a list. Removing an absent name is a no-op.
    pub fn remove_list(&mut self, name: &str) -> Option<TodoList> {
        let removed = self.lists.remove(name);
        if removed.is_some() {
            log::info!("Store: removed list '{}'", name);
        }
        removed
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    /// List names in ascending order.
    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
