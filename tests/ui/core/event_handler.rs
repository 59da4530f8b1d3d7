use todolist::ui::core::EventHandler;

#[tokio::test]
async fn test_render_pacing() {
    let mut event_handler = EventHandler::new();

    // Freshly created handler has just "rendered"
    assert!(!event_handler.should_render());

    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());

    event_handler.mark_rendered();
    assert!(!event_handler.should_render());
}
