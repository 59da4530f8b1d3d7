use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

use crate::utils::datetime;

/// Minimum number of characters a trimmed title must have.
pub const MIN_TITLE_CHARS: usize = 3;

/// Opaque identity of a todo. Assigned once and never changed by edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(Uuid);

impl TodoId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single task.
///
/// Values are immutable: the `with_*` methods consume the todo and return the
/// next version, keeping the same [`TodoId`]. Two todos with the same id are
/// versions of the same logical task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    notes: String,
    due_date: NaiveDate,
    completed: bool,
}

impl Todo {
    /// Create a todo with a fresh id, empty notes, due today and not completed.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            title: title.into(),
            notes: String::new(),
            due_date: datetime::today(),
            completed: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> TodoId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_notes(self, notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_due_date(self, due_date: NaiveDate) -> Self {
        Self { due_date, ..self }
    }

    #[must_use]
    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }
}

impl Default for Todo {
    fn default() -> Self {
        Self::new("")
    }
}

/// A title is valid when, after trimming, it has at least [`MIN_TITLE_CHARS`] characters.
#[must_use]
pub fn is_valid_title(title: &str) -> bool {
    let trimmed = title.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= MIN_TITLE_CHARS
}
