//! # NoteCard Component
//!
//! Renders a single note as a bordered card tinted with the note's color:
//!
//! ```text
//! ╭──────────────────────────╮
//! │Shop                      │  ← title, bold, only when non-empty
//! │milk, eggs, bread         │  ← text, wrapped
//! │[delete] [color]          │  ← toolbar
//! ╰──────────────────────────╯
//! ```
//!
//! Stateless. Heights and toolbar icon positions are pure functions of the
//! note and the width, so the list can lay out and hit test cards without
//! rendering them.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::note::Note;
use crate::tui::colors;

pub const DELETE_LABEL: &str = "[delete]";
pub const COLOR_LABEL: &str = "[color]";

/// Top + bottom border rows.
const VERTICAL_OVERHEAD: u16 = 2;
/// Content lines past this are clipped so the card height stays a `u16`.
const MAX_CONTENT_LINES: u16 = u16::MAX - 1 - VERTICAL_OVERHEAD;
/// Left + right border columns.
const HORIZONTAL_OVERHEAD: u16 = 2;

/// The pieces of a card and where each goes on screen.
///
/// Built instead of drawn so the list can hand them to a `ScrollView`.
pub struct CardWidgets<'a> {
    pub block: Block<'a>,
    pub content: Paragraph<'a>,
    pub content_area: Rect,
    pub toolbar: Paragraph<'a>,
    pub toolbar_area: Rect,
}

/// Card geometry relative to the card's own top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub height: u16,
    pub delete_icon: Rect,
    pub color_icon: Rect,
}

pub struct NoteCard<'a> {
    pub note: &'a Note,
    pub selected: bool,
}

impl<'a> NoteCard<'a> {
    pub fn new(note: &'a Note, selected: bool) -> Self {
        Self { note, selected }
    }

    fn content(&self) -> Paragraph<'a> {
        let mut lines = Vec::new();
        if self.note.has_title() {
            lines.push(Line::from(Span::styled(
                self.note.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        lines.extend(self.note.text.lines().map(Line::from));
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }

    fn content_lines(&self, inner_width: u16) -> u16 {
        if inner_width == 0 {
            return 1;
        }
        let lines = self.content().line_count(inner_width);
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .clamp(1, MAX_CONTENT_LINES)
    }

    pub fn layout(&self, width: u16) -> CardLayout {
        let inner_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        let content_lines = self.content_lines(inner_width);
        let toolbar_row = 1 + content_lines;
        let delete_width = (DELETE_LABEL.len() as u16).min(inner_width);
        let color_x = 1 + delete_width + 1;
        let color_width = (COLOR_LABEL.len() as u16).min(width.saturating_sub(color_x + 1));
        CardLayout {
            height: content_lines + 1 + VERTICAL_OVERHEAD,
            delete_icon: Rect::new(1, toolbar_row, delete_width, 1),
            color_icon: Rect::new(color_x, toolbar_row, color_width, 1),
        }
    }

    pub fn widgets(&self, area: Rect) -> CardWidgets<'a> {
        let style = colors::card_style(&self.note.color);
        let (border_type, border_style) = if self.selected {
            (BorderType::Thick, style.add_modifier(Modifier::BOLD))
        } else {
            (BorderType::Rounded, style)
        };
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style)
            .style(style);

        let layout = self.layout(area.width);
        let content_area = Rect::new(
            area.x + 1,
            area.y.saturating_add(1),
            area.width.saturating_sub(HORIZONTAL_OVERHEAD),
            layout.height.saturating_sub(VERTICAL_OVERHEAD + 1),
        );
        let toolbar_area = Rect::new(
            area.x + 1,
            area.y.saturating_add(layout.delete_icon.y),
            area.width.saturating_sub(HORIZONTAL_OVERHEAD),
            1,
        );
        let toolbar = Paragraph::new(Line::from(vec![
            Span::raw(DELETE_LABEL),
            Span::raw(" "),
            Span::raw(COLOR_LABEL),
        ]))
        .style(style.add_modifier(Modifier::DIM));

        CardWidgets {
            block,
            content: self.content().style(style),
            content_area,
            toolbar,
            toolbar_area,
        }
    }
}
