use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use todolist::config::{Config, Language};
use todolist::constants::{DEFAULT_LIST_NAME, ENGLISH, GERMAN, SEED_TODO_TITLE};
use todolist::logger::Logger;
use todolist::ui::core::{AppContext, Component, DialogType, EventType, Screen};
use todolist::ui::AppComponent;

fn app_with(config: Config) -> AppComponent {
    AppComponent::new(AppContext::new(config, Logger::new()).unwrap())
}

fn app() -> AppComponent {
    app_with(Config::default())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::from(code))).unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen(app: &AppComponent) -> &Screen {
    app.context().navigation.screen()
}

fn titles(app: &AppComponent) -> Vec<String> {
    app.context()
        .active_list()
        .unwrap()
        .get_all()
        .iter()
        .map(|todo| todo.title().to_string())
        .collect()
}

fn rendered(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_create_todo_through_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(*screen(&app), Screen::CreateForm);

    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);

    assert_eq!(*screen(&app), Screen::ListView);
    assert_eq!(titles(&app), vec![SEED_TODO_TITLE, "Buy milk"]);
    assert_eq!(app.todo_list().todos.len(), 2);
}

#[test]
fn test_short_title_keeps_form_open() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "ab");
    press(&mut app, KeyCode::Enter);

    assert_eq!(*screen(&app), Screen::CreateForm);
    assert_eq!(titles(&app).len(), 1);
}

#[test]
fn test_edit_loads_selected_todo_and_cancel_discards() {
    let mut app = app();
    press(&mut app, KeyCode::Char('e'));
    assert!(matches!(screen(&app), Screen::EditForm { .. }));
    assert_eq!(app.form().title.value(), SEED_TODO_TITLE);

    type_text(&mut app, "!!!");
    press(&mut app, KeyCode::Esc);

    assert_eq!(*screen(&app), Screen::ListView);
    assert_eq!(titles(&app), vec![SEED_TODO_TITLE]);
}

#[test]
fn test_edit_replaces_in_place() {
    let mut app = app();
    let id = app.context().active_list().unwrap().get_all()[0].id();

    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::End);
    type_text(&mut app, " now");
    press(&mut app, KeyCode::Enter);

    let list = app.context().active_list().unwrap();
    assert_eq!(list.get_all()[0].id(), id);
    assert_eq!(list.get_all()[0].title(), format!("{} now", SEED_TODO_TITLE));
}

#[test]
fn test_q_is_text_inside_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "quiz");
    assert!(!app.should_quit());
    assert_eq!(app.form().title.value(), "quiz");

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_quit_from_list_view() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_toggle_and_delete_selected() {
    let mut app = app();
    press(&mut app, KeyCode::Char(' '));
    assert!(app.context().active_list().unwrap().get_all()[0].is_completed());

    press(&mut app, KeyCode::Char('d'));
    assert!(titles(&app).is_empty());
    assert!(app.todo_list().todos.is_empty());
}

#[test]
fn test_create_list_dialog() {
    let mut app = app();
    press(&mut app, KeyCode::Char('N'));
    assert_eq!(app.dialog_type(), Some(&DialogType::ListCreation));

    type_text(&mut app, "work");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.dialog_type(), None);
    assert_eq!(app.context().navigation.active_list(), "work");
    assert!(app.todo_list().todos.is_empty());
}

#[test]
fn test_duplicate_list_shows_error() {
    let mut app = app();
    press(&mut app, KeyCode::Char('N'));
    type_text(&mut app, DEFAULT_LIST_NAME);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Error(
            "Eine Liste mit dem Namen default existiert bereits.".to_string()
        ))
    );

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog_type(), None);

    // The English log line still carries the error itself
    assert!(app
        .context()
        .logger
        .get_logs()
        .iter()
        .any(|line| line.contains("List with name default already exists")));
}

#[test]
fn test_duplicate_list_error_in_english() {
    let mut config = Config::default();
    config.ui.language = Language::En;
    let mut app = app_with(config);

    press(&mut app, KeyCode::Char('N'));
    type_text(&mut app, DEFAULT_LIST_NAME);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Error("A list named default already exists.".to_string()))
    );
}

#[test]
fn test_form_keeps_title_as_typed() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "  Buy milk  ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(titles(&app), vec![SEED_TODO_TITLE, "  Buy milk  "]);
}

#[test]
fn test_removing_last_list_is_refused() {
    let mut app = app();
    press(&mut app, KeyCode::Char('D'));
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Error(GERMAN.last_list_error.to_string()))
    );
    assert!(app.context().store.contains(DEFAULT_LIST_NAME));
}

#[test]
fn test_tab_cycles_lists() {
    let mut app = app();
    press(&mut app, KeyCode::Char('N'));
    type_text(&mut app, "work");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.context().navigation.active_list(), DEFAULT_LIST_NAME);
    assert_eq!(app.todo_list().todos.len(), 1);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.context().navigation.active_list(), "work");
}

#[test]
fn test_render_list_view() {
    let mut app = app();
    let screen = rendered(&mut app);
    assert!(screen.contains(DEFAULT_LIST_NAME));
    assert!(screen.contains(SEED_TODO_TITLE));
    assert!(screen.contains(GERMAN.add_label));
}

#[test]
fn test_render_create_form_in_english() {
    let mut config = Config::default();
    config.ui.language = Language::En;
    let mut app = app_with(config);

    press(&mut app, KeyCode::Char('a'));
    let screen = rendered(&mut app);
    assert!(screen.contains(ENGLISH.create_title));
    assert!(screen.contains(ENGLISH.title_error));
    assert!(screen.contains(ENGLISH.cancel_label));
}

#[test]
fn test_render_help_dialog() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    let screen = rendered(&mut app);
    assert!(screen.contains(GERMAN.help_title));
    assert!(screen.contains("LIST VIEW"));
}
