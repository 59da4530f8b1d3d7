#[path = "core/context.rs"]
mod context;

#[path = "core/event_handler.rs"]
mod event_handler;
