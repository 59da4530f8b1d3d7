#[path = "ui/app_component.rs"]
mod app_component;

#[path = "ui/components.rs"]
mod components;

#[path = "ui/core.rs"]
mod ui_core;
