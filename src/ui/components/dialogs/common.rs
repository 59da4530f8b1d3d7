use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block showing `display` (which already contains the cursor)
pub fn create_input_paragraph(display: String, field_title: &str) -> Paragraph<'static> {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Creates a paragraph with a color-coded hint line such as "Enter: confirm • Esc: close"
pub fn create_instructions_paragraph(hints: &str) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (index, hint) in hints.split(" • ").enumerate() {
        if index > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
        }
        match hint.split_once(": ") {
            Some((key, desc)) => {
                spans.push(Span::styled(
                    key.to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
            }
            None => spans.push(Span::styled(hint.to_string(), Style::default().fg(Color::Gray))),
        }
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
