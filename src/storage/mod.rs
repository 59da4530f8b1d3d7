//! In-memory storage for todo lists
//!
//! The [`ListStore`] is the single owner of every [`TodoList`](crate::entities::TodoList)
//! in a session. Nothing is persisted; the store lives until the process exits.

pub mod list_store;

pub use list_store::{ListStore, StoreError};
