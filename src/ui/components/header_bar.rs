//! Header bar: menu marker, screen title and the screen's action button

use crate::constants::UiText;
use crate::icons::IconService;
use crate::ui::core::{Header, HeaderAction};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct HeaderBar;

impl HeaderBar {
    pub fn render(f: &mut Frame, area: Rect, header: &Header, icons: &IconService, text: &UiText) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let (action_icon, action_label, action_key, action_color) = match header.action {
            HeaderAction::Add => (icons.add(), text.add_label, "a", Color::Green),
            HeaderAction::Cancel => (icons.cancel(), text.cancel_label, "Esc", Color::Red),
        };
        let action_text = format!("{} {} ({})", action_icon, action_label, action_key);
        let action_width = u16::try_from(action_text.chars().count()).unwrap_or(u16::MAX);

        let chunks = Layout::horizontal([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(action_width),
        ])
        .split(inner);

        let menu = Paragraph::new(icons.menu()).style(Style::default().fg(Color::Gray));
        let title = Paragraph::new(Line::from(Span::styled(
            header.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        let action = Paragraph::new(action_text)
            .style(Style::default().fg(action_color))
            .alignment(Alignment::Right);

        f.render_widget(menu, chunks[0]);
        f.render_widget(title, chunks[1]);
        f.render_widget(action, chunks[2]);
    }
}
