//! # Placeholder Component
//!
//! Shown in place of the note list while the collection is empty.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Placeholder;

impl Component for Placeholder {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Notes you add appear here",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "press n or click the box above to start",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}
