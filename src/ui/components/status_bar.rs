//! Status bar component

use crate::ui::core::Screen;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// One-line key hints for the current screen, with the list position on the right
pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, area: Rect, screen: &Screen, hints: &str, list_position: Option<(usize, usize)>) {
        let mut status_text = hints.to_string();
        if let (Screen::ListView, Some((index, total))) = (screen, list_position) {
            status_text = format!("{}  [{}/{}]", status_text, index + 1, total);
        }

        let status_bar = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}
