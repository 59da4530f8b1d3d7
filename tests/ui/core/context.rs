use todolist::config::Config;
use todolist::constants::DEFAULT_LIST_NAME;
use todolist::entities::Todo;
use todolist::logger::Logger;
use todolist::storage::{ListStore, StoreError};
use todolist::ui::core::{AppContext, Transition};

fn context() -> AppContext {
    AppContext::new(Config::default(), Logger::new()).unwrap()
}

#[test]
fn test_initial_list_is_created_when_missing() {
    let mut config = Config::default();
    config.ui.initial_list = "work".to_string();
    let ctx = AppContext::new(config, Logger::new()).unwrap();

    assert_eq!(ctx.navigation.active_list(), "work");
    assert!(ctx.active_list().unwrap().is_empty());
    assert!(ctx.store.contains(DEFAULT_LIST_NAME));
}

#[test]
fn test_with_store_requires_existing_list() {
    let result = AppContext::with_store(ListStore::new(), "nope", Config::default(), Logger::new());
    assert_eq!(result.err(), Some(StoreError::ListNotFound("nope".to_string())));
}

#[test]
fn test_toggle_and_delete() {
    let mut ctx = context();
    let id = ctx.active_list().unwrap().get_all()[0].id();

    assert!(ctx.toggle_todo(id).unwrap());
    assert!(ctx.active_list().unwrap().get_one(id).unwrap().is_completed());
    assert!(ctx.toggle_todo(id).unwrap());
    assert!(!ctx.active_list().unwrap().get_one(id).unwrap().is_completed());

    assert!(ctx.delete_todo(id).unwrap());
    assert!(!ctx.delete_todo(id).unwrap());
    assert!(!ctx.toggle_todo(id).unwrap());
    assert!(ctx.active_list().unwrap().is_empty());
}

#[test]
fn test_create_list_switches_to_it() {
    let mut ctx = context();
    assert_eq!(ctx.create_list("  work ").unwrap(), Transition::Taken);
    assert_eq!(ctx.navigation.active_list(), "work");

    assert_eq!(
        ctx.create_list(DEFAULT_LIST_NAME).unwrap_err(),
        StoreError::DuplicateListName(DEFAULT_LIST_NAME.to_string())
    );
    assert_eq!(ctx.navigation.active_list(), "work");
    assert!(ctx.logger.get_logs().iter().any(|line| line.contains("List 'work' created")));
}

#[test]
fn test_last_list_is_never_removed() {
    let mut ctx = context();
    assert!(ctx.remove_active_list().unwrap().is_none());
    assert!(ctx.store.contains(DEFAULT_LIST_NAME));

    ctx.create_list("work").unwrap();
    let removed = ctx.remove_active_list().unwrap().unwrap();
    assert_eq!(removed.name(), "work");
    assert_eq!(ctx.navigation.active_list(), DEFAULT_LIST_NAME);
    assert_eq!(ctx.store.len(), 1);
}

#[test]
fn test_cycle_list_wraps_in_name_order() {
    let mut ctx = context();
    assert_eq!(ctx.cycle_list(true).unwrap(), Transition::Ignored);

    ctx.store.add_list("alpha", [Todo::new("first")]).unwrap();
    ctx.store.add_list("zulu", []).unwrap();

    ctx.cycle_list(true).unwrap();
    assert_eq!(ctx.navigation.active_list(), "zulu");
    ctx.cycle_list(true).unwrap();
    assert_eq!(ctx.navigation.active_list(), "alpha");
    ctx.cycle_list(false).unwrap();
    assert_eq!(ctx.navigation.active_list(), "zulu");
}
