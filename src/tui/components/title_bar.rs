//! # TitleBar Component
//!
//! Top status bar: application name, note count, and the last status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Jotter | 3 notes | Note added"`
//! 2. **Default**: `"Jotter | 3 notes"`
//!
//! Stateless. All fields are props copied from `App` each frame.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Number of notes in the collection
    pub note_count: usize,
    /// Status message (e.g., "Note added", "Color set to red")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(note_count: usize, status_message: String) -> Self {
        Self {
            note_count,
            status_message,
        }
    }

    fn count_label(&self) -> String {
        match self.note_count {
            1 => "1 note".to_string(),
            n => format!("{n} notes"),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Jotter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::raw(self.count_label()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Cyan),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
