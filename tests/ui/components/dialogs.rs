use ratatui::{backend::TestBackend, Terminal};
use todolist::constants::ENGLISH;
use todolist::icons::IconService;
use todolist::ui::components::DialogComponent;
use todolist::ui::core::{Action, Component, DialogType};

fn render(dialog: &mut DialogComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            dialog.render(f, area);
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
fn test_hidden_dialog_draws_nothing() {
    let mut dialog = DialogComponent::new(IconService::default(), &ENGLISH);
    assert!(render(&mut dialog).trim().is_empty());
}

#[test]
fn test_error_dialog_shows_message() {
    let mut dialog = DialogComponent::new(IconService::default(), &ENGLISH);
    dialog.update(Action::ShowDialog(DialogType::Error("Something broke".to_string())));

    let screen = render(&mut dialog);
    assert!(screen.contains(ENGLISH.error_title));
    assert!(screen.contains("Something broke"));
}

#[test]
fn test_list_creation_dialog_shows_input() {
    let mut dialog = DialogComponent::new(IconService::default(), &ENGLISH);
    dialog.update(Action::ShowDialog(DialogType::ListCreation));
    dialog.input.set("groceries");

    let screen = render(&mut dialog);
    assert!(screen.contains(ENGLISH.new_list_title));
    assert!(screen.contains("groceries"));
}

#[test]
fn test_logs_dialog_scroll_is_clamped() {
    let mut dialog = DialogComponent::new(IconService::default(), &ENGLISH);
    dialog.set_logs((0..5).map(|i| format!("entry {}", i)).collect());
    dialog.update(Action::ShowDialog(DialogType::Logs));
    dialog.scroll_offset = 100;

    let screen = render(&mut dialog);
    assert!(screen.contains("entry 0"));
    assert_eq!(dialog.scroll_offset, 0);
}
