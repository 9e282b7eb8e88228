//! # Color Picker Component
//!
//! A small tooltip of color swatches anchored to a card's `[color]` icon.
//!
//! ```text
//!  ┌────────────────────────────────────┐
//!  │ ● ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░ │   one 3-cell swatch per palette color
//!  └────────────────────────────────────┘
//!  [delete] [color]
//! ```
//!
//! Drawn above the icon when there is room, below otherwise, and shifted
//! left to stay on screen. The picker never changes notes itself: it emits
//! `PickerEvent::Apply` and the parent dispatches `Action::Recolor`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::note::NoteId;
use crate::tui::colors;
use crate::tui::component::{Component, EventHandler, contains};
use crate::tui::event::TuiEvent;

const SWATCH_WIDTH: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Apply(String),
    Close,
}

pub struct ColorPickerState {
    /// Note whose icon opened the picker
    pub id: NoteId,
    /// Screen rect of the `[color]` icon
    pub anchor: Rect,
    /// Opened from the keyboard; pointer movement does not hide it
    pub pinned: bool,
    palette: Vec<String>,
    selected: usize,
    area: Rect,
}

impl ColorPickerState {
    pub fn new(id: NoteId, anchor: Rect, palette: &[String], current: &str) -> Self {
        let selected = palette.iter().position(|c| c == current).unwrap_or(0);
        Self {
            id,
            anchor,
            pinned: false,
            palette: palette.to_vec(),
            selected,
            area: Rect::default(),
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn selected_color(&self) -> Option<&str> {
        self.palette.get(self.selected).map(String::as_str)
    }

    /// Tooltip rect inside `frame_area`.
    pub fn placement(&self, frame_area: Rect) -> Rect {
        let swatches = u16::try_from(self.palette.len()).unwrap_or(u16::MAX);
        let width = swatches
            .saturating_mul(SWATCH_WIDTH)
            .saturating_add(2)
            .min(frame_area.width);
        let height = frame_area.height.min(3);
        let y = if self.anchor.y >= frame_area.y + height {
            self.anchor.y - height
        } else {
            (self.anchor.y + 1).min(frame_area.bottom().saturating_sub(height))
        };
        let max_x = frame_area.right().saturating_sub(width);
        let x = self.anchor.x.min(max_x).max(frame_area.x);
        Rect::new(x, y, width, height)
    }

    /// Whether the pointer is over the tooltip or the icon it hangs from.
    pub fn is_hovered(&self, col: u16, row: u16) -> bool {
        contains(self.area, col, row) || contains(self.anchor, col, row)
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        contains(self.area, col, row)
    }

    /// The swatch color under a screen cell.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<&str> {
        let inner = Rect::new(
            self.area.x + 1,
            self.area.y + 1,
            self.area.width.saturating_sub(2),
            self.area.height.saturating_sub(2),
        );
        if !contains(inner, col, row) {
            return None;
        }
        let index = ((col - inner.x) / SWATCH_WIDTH) as usize;
        self.palette.get(index).map(String::as_str)
    }

    /// A click on a swatch applies it and leaves the picker open.
    pub fn click(&mut self, col: u16, row: u16) -> Option<PickerEvent> {
        let color = self.hit_test(col, row)?.to_string();
        if let Some(index) = self.palette.iter().position(|c| *c == color) {
            self.selected = index;
        }
        Some(PickerEvent::Apply(color))
    }
}

impl EventHandler for ColorPickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorLeft => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                if self.selected + 1 < self.palette.len() {
                    self.selected += 1;
                }
                None
            }
            TuiEvent::Submit => self
                .selected_color()
                .map(|color| PickerEvent::Apply(color.to_string())),
            TuiEvent::Escape => Some(PickerEvent::Close),
            _ => None,
        }
    }
}

pub struct ColorPicker<'a> {
    state: &'a mut ColorPickerState,
}

impl<'a> ColorPicker<'a> {
    pub fn new(state: &'a mut ColorPickerState) -> Self {
        Self { state }
    }
}

impl<'a> Component for ColorPicker<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let tooltip = self.state.placement(area);
        self.state.area = tooltip;
        frame.render_widget(Clear, tooltip);

        let swatches: Vec<Span> = self
            .state
            .palette
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let style = colors::card_style(label);
                let symbol = if i == self.state.selected { " ● " } else { "   " };
                Span::styled(symbol, style)
            })
            .collect();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray));
        frame.render_widget(Paragraph::new(Line::from(swatches)).block(block), tooltip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn palette() -> Vec<String> {
        ["white", "red", "green"].iter().map(|c| c.to_string()).collect()
    }

    fn draw(state: &mut ColorPickerState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ColorPicker::new(state).render(f, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_placed_above_icon_when_room() {
        let state = ColorPickerState::new(NoteId(1), Rect::new(10, 8, 7, 1), &palette(), "red");
        assert_eq!(state.placement(Rect::new(0, 0, 40, 12)), Rect::new(10, 5, 11, 3));
    }

    #[test]
    fn test_placed_below_near_top_and_clamped_right() {
        let state = ColorPickerState::new(NoteId(1), Rect::new(35, 1, 7, 1), &palette(), "red");
        assert_eq!(state.placement(Rect::new(0, 0, 40, 12)), Rect::new(29, 2, 11, 3));
    }

    #[test]
    fn test_large_palette_clamped_to_frame() {
        let palette: Vec<String> = (0..70_000).map(|i| format!("c{i}")).collect();
        let anchor = Rect::new(10, 8, 7, 1);
        let state = ColorPickerState::new(NoteId(1), anchor, &palette, "c1");
        assert_eq!(state.placement(Rect::new(0, 0, 40, 12)), Rect::new(0, 5, 40, 3));

        // 21845 swatches fill u16 exactly before the borders are added
        let state = ColorPickerState::new(NoteId(1), anchor, &palette[..21_845], "c1");
        assert_eq!(state.placement(Rect::new(0, 0, 40, 12)), Rect::new(0, 5, 40, 3));
    }

    #[test]
    fn test_swatch_click_applies_color() {
        let mut state =
            ColorPickerState::new(NoteId(1), Rect::new(10, 8, 7, 1), &palette(), "white");
        let text = draw(&mut state, 40, 12);
        assert!(text.contains('●'));
        // swatches start at column 11; second swatch is red
        assert_eq!(state.click(14, 6), Some(PickerEvent::Apply("red".to_string())));
        assert_eq!(state.selected_color(), Some("red"));
        // border is not a swatch
        assert_eq!(state.click(10, 6), None);
    }

    #[test]
    fn test_hover_covers_anchor_and_tooltip() {
        let mut state =
            ColorPickerState::new(NoteId(1), Rect::new(10, 8, 7, 1), &palette(), "white");
        draw(&mut state, 40, 12);
        assert!(state.is_hovered(12, 8));
        assert!(state.is_hovered(12, 5));
        assert!(!state.is_hovered(30, 10));
    }

    #[test]
    fn test_keyboard_moves_and_applies() {
        let mut state =
            ColorPickerState::new(NoteId(1), Rect::new(10, 8, 7, 1), &palette(), "unknown");
        assert_eq!(state.selected_color(), Some("white"));
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.selected_color(), Some("white"));
        state.handle_event(&TuiEvent::CursorRight);
        state.handle_event(&TuiEvent::CursorRight);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(PickerEvent::Apply("green".to_string()))
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(PickerEvent::Close));
    }
}
