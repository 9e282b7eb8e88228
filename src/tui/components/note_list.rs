//! # NoteList Component
//!
//! Scrollable view of every note card, in collection order.
//!
//! ## Responsibilities
//!
//! - Regenerate the whole list from the collection on every draw
//! - Show the empty-state placeholder when there are no notes
//! - Keyboard selection and scrolling
//! - Hit testing for mouse interactions (card body, delete icon, color icon)
//!
//! ## Architecture
//!
//! `NoteList` is a transient component (created each frame) that wraps
//! `&'a mut NoteListState` (persistent state) and `&'a [Note]` (props).
//! Rendering records each card's layout in the state so that mouse events
//! arriving before the next frame can be resolved to a note.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::note::{Note, NoteId};
use crate::tui::component::{Component, EventHandler, contains};
use crate::tui::components::note_card::CardLayout;
use crate::tui::components::{NoteCard, Placeholder};
use crate::tui::event::TuiEvent;

/// What the pointer is over, in list terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListHit {
    Body(NoteId),
    DeleteIcon(NoteId),
    /// Carries the icon's screen rect so the color picker can anchor to it.
    ColorIcon(NoteId, Rect),
}

/// Layout of one card as of the last render.
#[derive(Debug, Clone, Copy)]
struct CardSlot {
    id: NoteId,
    top: u16,
    layout: CardLayout,
}

pub struct NoteListState {
    pub scroll_state: ScrollViewState,
    /// Index into the collection of the keyboard-selected card
    pub selected_index: Option<usize>,
    /// Screen area of the list viewport from the last render
    pub viewport: Rect,
    slots: Vec<CardSlot>,
}

impl Default for NoteListState {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected_index: None,
            viewport: Rect::default(),
            slots: Vec::new(),
        }
    }

    fn total_height(&self) -> u16 {
        self.slots
            .last()
            .map(|s| s.top + s.layout.height)
            .unwrap_or(0)
    }

    /// Keep the scroll offset within the content after notes were removed.
    fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll just enough to bring the selected card fully into view.
    pub fn scroll_to_selected(&mut self) {
        let Some(slot) = self.selected_index.and_then(|i| self.slots.get(i)) else {
            return;
        };
        let item_top = slot.top;
        let item_bottom = slot.top + slot.layout.height;
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y.saturating_add(self.viewport.height) {
            let new_y = item_bottom.saturating_sub(self.viewport.height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Move the selection by `delta` cards, clamped to `len` notes and to
    /// the cards laid out by the last render.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        let len = if self.slots.is_empty() {
            len
        } else {
            len.min(self.slots.len())
        };
        if len == 0 {
            self.selected_index = None;
            return;
        }
        let next = match self.selected_index {
            None if delta < 0 => len - 1,
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(len - 1),
        };
        self.selected_index = Some(next);
        self.scroll_to_selected();
    }

    /// Re-clamp the selection after the collection changed size.
    pub fn sync_len(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected_index
            .and_then(|i| self.slots.get(i))
            .map(|s| s.id)
    }

    pub fn select_id(&mut self, id: NoteId) {
        if let Some(idx) = self.slots.iter().position(|s| s.id == id) {
            self.selected_index = Some(idx);
        }
    }

    /// Resolve a screen cell to a card part.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<ListHit> {
        if !contains(self.viewport, col, row) {
            return None;
        }
        let offset_y = self.scroll_state.offset().y;
        let x = col - self.viewport.x;
        let y = (row - self.viewport.y).saturating_add(offset_y);

        let slot = self
            .slots
            .iter()
            .find(|s| y >= s.top && y < s.top + s.layout.height)?;
        let local_y = y - slot.top;

        if contains(slot.layout.delete_icon, x, local_y) {
            return Some(ListHit::DeleteIcon(slot.id));
        }
        if contains(slot.layout.color_icon, x, local_y) {
            return Some(ListHit::ColorIcon(slot.id, self.icon_on_screen(slot)));
        }
        Some(ListHit::Body(slot.id))
    }

    /// Screen rect of the selected card's color icon, for keyboard-opened pickers.
    pub fn selected_color_icon(&self) -> Option<Rect> {
        let slot = self.selected_index.and_then(|i| self.slots.get(i))?;
        Some(self.icon_on_screen(slot))
    }

    fn icon_on_screen(&self, slot: &CardSlot) -> Rect {
        let icon = slot.layout.color_icon;
        let row = (slot.top + icon.y).saturating_sub(self.scroll_state.offset().y);
        Rect::new(
            self.viewport.x + icon.x,
            self.viewport
                .y
                .saturating_add(row)
                .min(self.viewport.bottom().saturating_sub(1)),
            icon.width,
            icon.height,
        )
    }
}

pub struct NoteList<'a> {
    pub state: &'a mut NoteListState,
    pub notes: &'a [Note],
}

impl<'a> NoteList<'a> {
    pub fn new(state: &'a mut NoteListState, notes: &'a [Note]) -> Self {
        Self { state, notes }
    }
}

impl<'a> Component for NoteList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport = area;
        self.state.sync_len(self.notes.len());

        if self.notes.is_empty() {
            self.state.slots.clear();
            self.state.scroll_state = ScrollViewState::default();
            Placeholder.render(frame, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        // 1. Lay out cards in collection order until the canvas is full
        let mut top = 0u16;
        let mut slots = Vec::with_capacity(self.notes.len());
        for (i, note) in self.notes.iter().enumerate() {
            let selected = self.state.selected_index == Some(i);
            let layout = NoteCard::new(note, selected).layout(content_width);
            let Some(bottom) = top.checked_add(layout.height) else {
                break;
            };
            slots.push(CardSlot {
                id: note.id,
                top,
                layout,
            });
            top = bottom;
        }
        self.state.slots = slots;
        self.state.sync_len(self.state.slots.len());
        self.state.clamp_scroll();

        // 2. Draw them all into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, top))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        // zip stops at the last slot, so cards past the canvas are skipped
        for (i, (note, slot)) in self.notes.iter().zip(&self.state.slots).enumerate() {
            let selected = self.state.selected_index == Some(i);
            let card_area = Rect::new(0, slot.top, content_width, slot.layout.height);
            let card = NoteCard::new(note, selected).widgets(card_area);
            scroll_view.render_widget(card.block, card_area);
            scroll_view.render_widget(card.content, card.content_area);
            scroll_view.render_widget(card.toolbar, card.toolbar_area);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl<'a> EventHandler for NoteList<'a> {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.state.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.state.scroll_state.scroll_down();
                self.state.clamp_scroll();
            }
            TuiEvent::CursorUp => self.state.move_selection(-1, self.notes.len()),
            TuiEvent::CursorDown => self.state.move_selection(1, self.notes.len()),
            TuiEvent::CursorHome => {
                self.state.selected_index = None;
                self.state.move_selection(1, self.notes.len());
            }
            TuiEvent::CursorEnd => {
                self.state.selected_index = None;
                self.state.move_selection(-1, self.notes.len());
            }
            _ => {}
        }
        None
    }
}
