//! Todo List - an in-memory todo list manager for the terminal
//!
//! Todos live in named lists held by a [`storage::ListStore`]. A small
//! navigation state machine decides whether the list view, the create form or
//! the edit form is shown, and a Ratatui interface drives it.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Todo and todo list types
//! * [`storage`] - The in-memory store of named lists
//! * [`ui`] - Terminal user interface components and navigation
//! * [`utils`] - Date helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants, seed data and UI text
pub mod constants;

/// Todo and todo list types
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// In-memory store of named todo lists
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

pub use entities::{Todo, TodoId, TodoList};
pub use storage::{ListStore, StoreError};
