use crate::constants::{UiText, DIALOG_WIDTH_PERCENT};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph,
};
use crate::ui::components::text_input::TextInput;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

pub fn render_list_creation_dialog(f: &mut Frame, area: Rect, icons: &IconService, text: &UiText, input: &TextInput) {
    let dialog_area = LayoutManager::centered_rect_lines(DIALOG_WIDTH_PERCENT, 8, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(format!("{} {}", icons.add(), text.new_list_title), Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Name input
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    f.render_widget(main_block, dialog_area);
    f.render_widget(
        create_input_paragraph(input.display_with_cursor(), text.list_name_label),
        chunks[0],
    );
    f.render_widget(create_instructions_paragraph(text.dialog_hints), chunks[1]);
}
