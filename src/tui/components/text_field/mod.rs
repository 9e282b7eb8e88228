//! # TextField Component
//!
//! An editable text buffer with a cursor, used for the title and text of
//! both the creation form and the edit dialog.
//!
//! ## Responsibilities
//!
//! - Capture typed and pasted text
//! - Editing (backspace, delete, cursor movement)
//! - Render the buffer (or a dimmed placeholder) into a borderless area
//! - Place the terminal cursor when focused
//!
//! A single-line field drops newlines from pastes and ignores `Newline`.
//! The parent decides what Enter and Tab mean, so the field never consumes
//! `Submit` or `Tab`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{next_char_boundary, prev_char_boundary, wrap_line_count};

/// Emitted whenever the field consumed an event.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    Changed,
    CursorMoved,
}

pub struct TextField {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Shown dimmed while the buffer is empty (Prop)
    pub placeholder: &'static str,
    /// Whether the terminal cursor belongs to this field (Prop)
    pub focused: bool,
    /// Base style; bold for titles (Prop)
    pub style: Style,
    multiline: bool,
    cursor: CursorState,
}

impl TextField {
    pub fn single_line(placeholder: &'static str) -> Self {
        Self::new(placeholder, false)
    }

    pub fn multi_line(placeholder: &'static str) -> Self {
        Self::new(placeholder, true)
    }

    fn new(placeholder: &'static str, multiline: bool) -> Self {
        Self {
            buffer: String::new(),
            placeholder,
            focused: false,
            style: Style::default(),
            multiline,
            cursor: CursorState::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.buffer = if self.multiline {
            value.to_string()
        } else {
            value.replace(['\r', '\n'], " ")
        };
        self.cursor.move_to_end(&self.buffer);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    /// Lines needed to show the whole buffer at `width`, clamped to `max_lines`.
    pub fn height(&self, width: u16, max_lines: u16) -> u16 {
        wrap_line_count(&self.buffer, width).clamp(1, max_lines.max(1))
    }

    fn insert_str(&mut self, text: &str) {
        let text = if self.multiline {
            text.replace('\r', "")
        } else {
            text.replace(['\r', '\n'], " ")
        };
        self.buffer.insert_str(self.cursor.pos, &text);
        self.cursor.pos += text.len();
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.cursor.last_width = area.width;
        self.cursor
            .update_scroll_offset(&self.buffer, area.width, area.height);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder).style(self.style.add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.buffer.as_str())
                .style(self.style)
                .wrap(Wrap { trim: false })
                .scroll((self.cursor.scroll_offset, 0))
        };
        frame.render_widget(paragraph, area);

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Newline if self.multiline => {
                self.buffer.insert(self.cursor.pos, '\n');
                self.cursor.pos += 1;
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    FieldEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    FieldEvent::CursorMoved
                })
            }
            TuiEvent::CursorUp if self.multiline => self
                .cursor
                .move_vertically(&self.buffer, -1)
                .then_some(FieldEvent::CursorMoved),
            TuiEvent::CursorDown if self.multiline => self
                .cursor
                .move_vertically(&self.buffer, 1)
                .then_some(FieldEvent::CursorMoved),
            _ => None,
        }
    }
}
