use crate::entities::{Todo, TodoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextTodo,
    PreviousTodo,
    OpenCreateForm,
    OpenEditForm(TodoId),
    CancelForm,
    SubmitTodo(Todo),
    NextList,
    PreviousList,

    // Todo operations
    ToggleTodo(TodoId),
    DeleteTodo(TodoId),

    // List operations
    CreateList(String),
    RemoveActiveList,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    ListCreation,
    Error(String),
    Help,
    Logs,
}
