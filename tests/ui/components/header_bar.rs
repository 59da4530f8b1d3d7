use ratatui::{backend::TestBackend, Terminal};
use todolist::constants::GERMAN;
use todolist::icons::IconService;
use todolist::ui::components::HeaderBar;
use todolist::ui::core::{Header, HeaderAction};

fn render(header: &Header) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            HeaderBar::render(f, area, header, &IconService::default(), &GERMAN);
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
fn test_list_header_offers_add() {
    let screen = render(&Header {
        title: "Einkauf".to_string(),
        action: HeaderAction::Add,
    });
    assert!(screen.contains("Einkauf"));
    assert!(screen.contains(GERMAN.add_label));
    assert!(screen.contains("(a)"));
}

#[test]
fn test_form_header_offers_cancel() {
    let screen = render(&Header {
        title: GERMAN.edit_title.to_string(),
        action: HeaderAction::Cancel,
    });
    assert!(screen.contains(GERMAN.edit_title));
    assert!(screen.contains(GERMAN.cancel_label));
}
