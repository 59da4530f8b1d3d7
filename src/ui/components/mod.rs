//! Reusable UI components

pub mod header_bar;
pub mod status_bar;
pub mod text_input;

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod todo_form_component;
pub mod todo_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use header_bar::HeaderBar;
pub use status_bar::StatusBar;
pub use text_input::TextInput;
pub use todo_form_component::TodoFormComponent;
pub use todo_list_component::TodoListComponent;
