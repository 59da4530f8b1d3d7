use crate::constants::{UiText, DIALOG_WIDTH_PERCENT};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{create_dialog_block, create_instructions_paragraph};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

pub fn render_error_dialog(f: &mut Frame, area: Rect, icons: &IconService, text: &UiText, message: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(DIALOG_WIDTH_PERCENT, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!("{} {}", icons.error(), text.error_title), Color::Red);
    let inner = block.inner(dialog_area);

    let message_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    let instructions_area = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, message_area);
    f.render_widget(create_instructions_paragraph(text.dialog_hints), instructions_area);
}

/// Scrollable text dialog used for help and logs.
///
/// Returns the scroll offset clamped to the content that is actually shown.
pub fn render_scrollable_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    lines: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let dialog_area = LayoutManager::centered_rect(80, 70, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, Color::Blue);
    let content_area = block.inner(dialog_area);
    let visible_height = content_area.height as usize;
    let total_lines = lines.len();

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);
    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text).style(Style::default().fg(Color::White));

    f.render_widget(block, dialog_area);
    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐");
        f.render_stateful_widget(scrollbar, dialog_area, scrollbar_state);
    }

    clamped_offset
}
