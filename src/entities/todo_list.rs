use super::todo::{Todo, TodoId};

/// An ordered, named collection of todos.
///
/// Insertion order is preserved and positions never move on update. Every
/// successful mutation bumps [`TodoList::revision`], which views poll to know
/// when their cached snapshot is stale.
#[derive(Debug, Clone)]
pub struct TodoList {
    name: String,
    todos: Vec<Todo>,
    revision: u64,
}

impl TodoList {
    pub fn new(name: impl Into<String>, todos: impl IntoIterator<Item = Todo>) -> Self {
        Self {
            name: name.into(),
            todos: todos.into_iter().collect(),
            revision: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a todo. Ids are unique by construction, so no check is made here.
    pub fn add(&mut self, todo: Todo) -> &Todo {
        log::debug!("List '{}': adding todo {}", self.name, todo.id());
        self.todos.push(todo);
        self.bump();
        &self.todos[self.todos.len() - 1]
    }

    #[must_use]
    pub fn get_one(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    #[must_use]
    pub fn get_all(&self) -> &[Todo] {
        &self.todos
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: TodoId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.todos.remove(index);
                self.bump();
                log::debug!("List '{}': removed todo {}", self.name, id);
                true
            }
            None => false,
        }
    }

    /// Replace the entry sharing `todo`'s id in place.
    ///
    /// Returns `None` and leaves the list untouched when no entry matches.
    pub fn update(&mut self, todo: Todo) -> Option<&Todo> {
        let index = self.position(todo.id())?;
        log::info!("List '{}': updated todo '{}'", self.name, todo.title());
        self.todos[index] = todo;
        self.bump();
        Some(&self.todos[index])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Change counter for the contents of this list.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == id)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
