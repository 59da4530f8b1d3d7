//! Constants used throughout the application
//!
//! This module centralizes seed data, UI text for both supported languages,
//! and other constant values.

// Seed data
pub const DEFAULT_LIST_NAME: &str = "default";
pub const SEED_TODO_TITLE: &str = "Try the todo list";
pub const SEED_TODO_NOTES: &str = "Press 'a' to add, 'e' to edit, 'd' to delete.";

// Config file locations
pub const CONFIG_FILE_NAME: &str = "todolist.toml";
pub const CONFIG_DIR_NAME: &str = "todolist";
pub const LOG_FILE_NAME: &str = "todolist.log";

// Status messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Height of the header bar in rows
pub const HEADER_HEIGHT: u16 = 3;
/// Width of modal dialogs as a percentage of the screen
pub const DIALOG_WIDTH_PERCENT: u16 = 60;

/// Every user-facing string for one UI language.
#[derive(Debug)]
pub struct UiText {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub title_label: &'static str,
    pub notes_label: &'static str,
    pub due_label: &'static str,
    pub completed_label: &'static str,
    pub save_label: &'static str,
    pub cancel_label: &'static str,
    pub add_label: &'static str,
    pub title_error: &'static str,
    pub empty_list: &'static str,
    pub today: &'static str,
    pub tomorrow: &'static str,
    pub yesterday: &'static str,
    pub new_list_title: &'static str,
    pub list_name_label: &'static str,
    pub error_title: &'static str,
    pub help_title: &'static str,
    pub logs_title: &'static str,
    pub last_list_error: &'static str,
    /// `{}` is replaced by the list name
    pub duplicate_list_error: &'static str,
    /// `{}` is replaced by the list name
    pub list_not_found_error: &'static str,
    pub list_hints: &'static str,
    pub form_hints: &'static str,
    pub dialog_hints: &'static str,
}

pub const GERMAN: UiText = UiText {
    create_title: "Aufgabe erstellen",
    edit_title: "Aufgabe bearbeiten",
    title_label: "Titel",
    notes_label: "Notizen",
    due_label: "Fälligkeit",
    completed_label: "Erledigt",
    save_label: "Speichern",
    cancel_label: "Abbrechen",
    add_label: "Neue Aufgabe",
    title_error: "Der Titel muss mindestens 3 Zeichen lang sein.",
    empty_list: "Keine Aufgaben",
    today: "heute",
    tomorrow: "morgen",
    yesterday: "gestern",
    new_list_title: "Neue Liste",
    list_name_label: "Name",
    error_title: "Fehler",
    help_title: "Hilfe",
    logs_title: "Protokoll",
    last_list_error: "Die letzte Liste kann nicht gelöscht werden.",
    duplicate_list_error: "Eine Liste mit dem Namen {} existiert bereits.",
    list_not_found_error: "Die Liste {} existiert nicht.",
    list_hints: "a: neu • e: bearbeiten • d: löschen • Leertaste: erledigt • ?: Hilfe • q: beenden",
    form_hints: "Tab: nächstes Feld • Enter: speichern • Esc: abbrechen",
    dialog_hints: "Enter: bestätigen • Esc: schließen",
};

pub const ENGLISH: UiText = UiText {
    create_title: "Create task",
    edit_title: "Edit task",
    title_label: "Title",
    notes_label: "Notes",
    due_label: "Due",
    completed_label: "Completed",
    save_label: "Save",
    cancel_label: "Cancel",
    add_label: "Add task",
    title_error: "The title must be at least 3 characters long.",
    empty_list: "No tasks",
    today: "today",
    tomorrow: "tomorrow",
    yesterday: "yesterday",
    new_list_title: "New list",
    list_name_label: "Name",
    error_title: "Error",
    help_title: "Help",
    logs_title: "Logs",
    last_list_error: "The last list cannot be removed.",
    duplicate_list_error: "A list named {} already exists.",
    list_not_found_error: "The list {} does not exist.",
    list_hints: "a: add • e: edit • d: delete • Space: toggle • ?: help • q: quit",
    form_hints: "Tab: next field • Enter: save • Esc: cancel",
    dialog_hints: "Enter: confirm • Esc: close",
};

pub const HELP_TEXT: &str = r"
LIST VIEW
---------
j/k, Up/Down   Select task
a              Create task
e, Enter       Edit selected task
d              Delete selected task
Space          Toggle completion
Tab/Shift+Tab  Next/previous list
N              Create list
D              Delete current list

FORM
----
Tab/Shift+Tab  Next/previous field
Left/Right     Due date -/+ 1 day (on due field)
Up/Down        Due date -/+ 1 week (on due field)
t              Due date today (on due field)
Space          Toggle completed (on checkbox)
Enter          Save
Esc            Cancel

GENERAL
-------
?              Help
G              Logs
q, Ctrl+C      Quit
";
