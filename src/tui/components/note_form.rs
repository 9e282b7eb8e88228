//! # NoteForm Component
//!
//! The creation form at the top of the screen.
//!
//! ## States
//!
//! ```text
//!            click inside / n
//!   Closed ─────────────────────▶ Open
//!     ▲                            │
//!     │  click outside, empty      │
//!     ├────────────────────────────┤
//!     │  click outside, has draft  │
//!     ├──────── Submit ────────────┤   (parent creates the note)
//!     │  [Close] control           │
//!     └──────── discard ───────────┘
//! ```
//!
//! Closed shows only a one-line "Take a note..." prompt. Open shows the title
//! field, the text field, and the `[Close]` control. `Esc` behaves like a
//! click outside.
//!
//! The form owns the draft. It never creates notes itself: it emits
//! `FormEvent::Submit` and the parent turns that into `Action::Create`, then
//! calls `close()`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler, contains};
use crate::tui::components::TextField;
use crate::tui::event::TuiEvent;

pub const CLOSE_LABEL: &str = "[Close]";

/// Height of the form while closed: one prompt line plus borders.
const CLOSED_HEIGHT: u16 = 3;
/// Most text lines the open form grows to before scrolling inside the field.
const MAX_TEXT_LINES: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The draft should become a note.
    Submit { title: String, text: String },
    /// The form closed without producing a note.
    Closed,
}

pub struct NoteForm {
    pub open: bool,
    pub title: TextField,
    pub text: TextField,
    pub focus: FormField,
    /// Screen areas from the last render, for hit testing
    area: Rect,
    title_area: Rect,
    close_button: Rect,
}

impl Default for NoteForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteForm {
    pub fn new() -> Self {
        let mut title = TextField::single_line("Title");
        title.style = Style::default().add_modifier(Modifier::BOLD);
        Self {
            open: false,
            title,
            text: TextField::multi_line("Take a note..."),
            focus: FormField::Text,
            area: Rect::default(),
            title_area: Rect::default(),
            close_button: Rect::default(),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.text.is_empty()
    }

    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.focus = FormField::Text;
        }
    }

    /// Close and reset the draft.
    pub fn close(&mut self) {
        self.open = false;
        self.title.clear();
        self.text.clear();
        self.focus = FormField::Text;
    }

    pub fn height(&self, width: u16) -> u16 {
        if !self.open {
            return CLOSED_HEIGHT;
        }
        let inner_width = width.saturating_sub(2);
        // borders + title + text + control row
        2 + 1 + self.text.height(inner_width, MAX_TEXT_LINES) + 1
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        contains(self.area, col, row)
    }

    /// What a click at (col, row) means for the form.
    ///
    /// Inside opens it; outside submits a non-empty draft or just closes;
    /// the `[Close]` control discards the draft.
    pub fn click(&mut self, col: u16, row: u16) -> Option<FormEvent> {
        if self.open && contains(self.close_button, col, row) {
            self.close();
            return Some(FormEvent::Closed);
        }
        if self.contains(col, row) {
            let was_open = self.open;
            self.open();
            if was_open {
                self.focus = if contains(self.title_area, col, row) {
                    FormField::Title
                } else {
                    FormField::Text
                };
            }
            return None;
        }
        self.dismiss()
    }

    /// Leave the form: submit a draft if there is one, otherwise just close.
    pub fn dismiss(&mut self) -> Option<FormEvent> {
        if self.has_content() {
            return Some(self.submit());
        }
        if self.open {
            self.close();
            return Some(FormEvent::Closed);
        }
        None
    }

    fn submit(&mut self) -> FormEvent {
        FormEvent::Submit {
            title: self.title.value().to_string(),
            text: self.text.value().to_string(),
        }
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Text => &mut self.text,
        }
    }
}

impl Component for NoteForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = area;
        let border_style = if self.open {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !self.open {
            self.title_area = Rect::default();
            self.close_button = Rect::default();
            self.text.focused = false;
            self.text.render(frame, inner);
            return;
        }

        let text_height = inner.height.saturating_sub(2);
        self.title_area = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));
        let text_area = Rect::new(inner.x, inner.y + 1, inner.width, text_height);
        let controls_y = inner.y + inner.height.saturating_sub(1);
        let close_width = (CLOSE_LABEL.len() as u16).min(inner.width);
        self.close_button = Rect::new(
            inner.x + inner.width - close_width,
            controls_y,
            close_width,
            1,
        );

        self.title.focused = self.focus == FormField::Title;
        self.text.focused = self.focus == FormField::Text;
        self.title.render(frame, self.title_area);
        self.text.render(frame, text_area);
        frame.render_widget(
            Paragraph::new(CLOSE_LABEL).style(Style::default().fg(Color::Gray)),
            self.close_button,
        );
    }
}

impl EventHandler for NoteForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Tab => {
                self.focus = match self.focus {
                    FormField::Title => FormField::Text,
                    FormField::Text => FormField::Title,
                };
                None
            }
            TuiEvent::Submit | TuiEvent::Escape => self.dismiss(),
            other => {
                self.focused_field().handle_event(other);
                None
            }
        }
    }
}
