//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::note::{DEFAULT_COLOR, Note, NoteId};
use crate::core::state::App;

/// Creates an empty test App with default colors.
pub fn test_app() -> App {
    App::new(Vec::new(), 0)
}

/// Shorthand for a note with the default color.
pub fn note(id: u64, title: &str, text: &str) -> Note {
    Note::new(NoteId(id), title, text, DEFAULT_COLOR)
}

/// Flattens a test terminal's buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
