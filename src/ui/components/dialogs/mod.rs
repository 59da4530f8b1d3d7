//! Render functions for the modal dialogs

pub mod common;
pub mod list_dialogs;
pub mod system_dialogs;
