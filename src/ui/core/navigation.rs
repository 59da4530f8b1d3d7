//! Screen navigation state machine.
//!
//! The session is always on exactly one [`Screen`] over one active list:
//!
//! ```text
//!            add                       edit(id), id present
//! ListView ───────► CreateForm   ListView ───────────────────► EditForm
//!    ▲                  │            ▲                            │
//!    └── cancel/submit ─┘            └─────── cancel/submit ──────┘
//! ```
//!
//! There is no back stack: cancelling a form always returns to the list view
//! over the same list. The header shown above each screen is derived from the
//! screen variant, so header and body can never disagree.

use crate::constants::UiText;
use crate::entities::{Todo, TodoId};
use crate::storage::{ListStore, StoreError};

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    ListView,
    CreateForm,
    EditForm { todo: Todo },
}

/// Action button offered by the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Add,
    Cancel,
}

/// Header descriptor for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub action: HeaderAction,
}

/// Whether a transition request changed the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Taken,
    Ignored,
}

impl Transition {
    #[must_use]
    pub fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }
}

/// Active list plus the screen shown over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_list: String,
    screen: Screen,
}

impl NavigationState {
    /// Start on the list view of `active_list`, which must exist in `store`.
    pub fn new(store: &ListStore, active_list: impl Into<String>) -> Result<Self, StoreError> {
        let active_list = active_list.into();
        store.list(&active_list)?;
        Ok(Self {
            active_list,
            screen: Screen::ListView,
        })
    }

    #[must_use]
    pub fn active_list(&self) -> &str {
        &self.active_list
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn header(&self, text: &UiText) -> Header {
        match &self.screen {
            Screen::ListView => Header {
                title: self.active_list.clone(),
                action: HeaderAction::Add,
            },
            Screen::CreateForm => Header {
                title: text.create_title.to_string(),
                action: HeaderAction::Cancel,
            },
            Screen::EditForm { .. } => Header {
                title: text.edit_title.to_string(),
                action: HeaderAction::Cancel,
            },
        }
    }

    /// ListView → CreateForm.
    pub fn open_create_form(&mut self) -> Transition {
        if self.screen != Screen::ListView {
            return Transition::Ignored;
        }
        log::debug!("Navigation: list '{}' -> create form", self.active_list);
        self.screen = Screen::CreateForm;
        Transition::Taken
    }

    /// ListView → EditForm for the todo with `id`.
    ///
    /// Ignored when the todo is no longer in the active list.
    pub fn open_edit_form(&mut self, store: &ListStore, id: TodoId) -> Result<Transition, StoreError> {
        if self.screen != Screen::ListView {
            return Ok(Transition::Ignored);
        }

        let Some(todo) = store.list(&self.active_list)?.get_one(id) else {
            log::debug!("Navigation: todo {} vanished before edit, staying on list", id);
            return Ok(Transition::Ignored);
        };

        log::debug!("Navigation: list '{}' -> edit form for {}", self.active_list, id);
        self.screen = Screen::EditForm { todo: todo.clone() };
        Ok(Transition::Taken)
    }

    /// Form → ListView without touching the list.
    pub fn cancel(&mut self) -> Transition {
        if self.screen == Screen::ListView {
            return Transition::Ignored;
        }
        log::debug!("Navigation: form cancelled, back to list '{}'", self.active_list);
        self.screen = Screen::ListView;
        Transition::Taken
    }

    /// CreateForm → ListView, appending `todo` to the active list first.
    pub fn submit_create(&mut self, store: &mut ListStore, todo: Todo) -> Result<Transition, StoreError> {
        if self.screen != Screen::CreateForm {
            return Ok(Transition::Ignored);
        }

        store.get_list(&self.active_list, false)?.add(todo);
        self.screen = Screen::ListView;
        Ok(Transition::Taken)
    }

    /// EditForm → ListView, replacing the edited todo first.
    ///
    /// If the todo was deleted while the form was open the edit is dropped and
    /// the transition still happens.
    pub fn submit_edit(&mut self, store: &mut ListStore, todo: Todo) -> Result<Transition, StoreError> {
        if !matches!(self.screen, Screen::EditForm { .. }) {
            return Ok(Transition::Ignored);
        }

        let id = todo.id();
        if store.get_list(&self.active_list, false)?.update(todo).is_none() {
            log::warn!(
                "Navigation: todo {} was removed from '{}' while editing, edit dropped",
                id,
                self.active_list
            );
        }
        self.screen = Screen::ListView;
        Ok(Transition::Taken)
    }

    /// ListView → ListView over another existing list.
    pub fn switch_list(&mut self, store: &ListStore, name: &str) -> Result<Transition, StoreError> {
        if self.screen != Screen::ListView || name == self.active_list {
            return Ok(Transition::Ignored);
        }

        store.list(name)?;
        log::debug!("Navigation: switching list '{}' -> '{}'", self.active_list, name);
        self.active_list = name.to_string();
        Ok(Transition::Taken)
    }
}
