//! Utility modules for the todo list application.
//!
//! - [`datetime`] - Calendar date helpers used by the model, the form's date
//!   picker and the list view's due-date labels

pub mod datetime;
