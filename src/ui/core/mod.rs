//! Core UI functionality for the todo list application.
//!
//! This module contains the fundamental building blocks for the user interface:
//!
//! - [`actions`] - Actions produced by components and applied by the app root
//! - [`component`] - Base component trait and rendering abstraction
//! - [`context`] - The session context: list store, navigation state, logger
//! - [`event_handler`] - Terminal event polling
//! - [`navigation`] - The screen state machine
//!
//! Components translate key presses into [`Action`]s; the app root applies them
//! to the [`AppContext`], which is the only place session state is mutated.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod navigation;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use navigation::{Header, HeaderAction, NavigationState, Screen, Transition};
