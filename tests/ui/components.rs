#[path = "components/dialogs.rs"]
mod dialogs;

#[path = "components/header_bar.rs"]
mod header_bar;
