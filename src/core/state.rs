//! # Application State
//!
//! Core business state for Jotter. Domain logic only, no terminal types.
//! Presentation state (form drafts, scroll offsets, overlays) lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── notes: Vec<Note>            // the collection, in display order
//! ├── last_id: u64                // highest id ever handed out
//! ├── target: Option<Target>      // note picked for a pending edit/recolor
//! ├── default_color: String       // color of new notes
//! ├── palette: Vec<String>        // colors offered by the picker
//! └── status_message: String      // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::collection;
use crate::core::config::ResolvedConfig;
use crate::core::note::{DEFAULT_COLOR, DEFAULT_PALETTE, Note, NoteId};

/// The note an edit or recolor will apply to, captured when it was selected.
///
/// Selection and confirmation are separate events (click a card, later
/// close the dialog; hover the color icon, later click a swatch), so the id
/// has to be held here in between. One pending target per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: NoteId,
    pub title: String,
    pub text: String,
}

pub struct App {
    pub notes: Vec<Note>,
    pub last_id: u64,
    pub target: Option<Target>,
    pub default_color: String,
    pub palette: Vec<String>,
    pub status_message: String,
}

impl App {
    pub fn new(notes: Vec<Note>, last_id: u64) -> Self {
        let last_id = last_id.max(collection::max_id(&notes));
        Self {
            notes,
            last_id,
            target: None,
            default_color: DEFAULT_COLOR.to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig, notes: Vec<Note>, last_id: u64) -> Self {
        let mut app = Self::new(notes, last_id);
        app.default_color = config.default_color.clone();
        app.palette = config.palette.clone();
        app
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    pub fn target_id(&self) -> Option<NoteId> {
        self.target.as_ref().map(|t| t.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{note, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.notes.is_empty());
        assert_eq!(app.last_id, 0);
        assert!(app.target.is_none());
        assert_eq!(app.default_color, "white");
        assert_eq!(app.palette.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn test_last_id_never_below_stored_ids() {
        let app = App::new(vec![note(3, "a", "b"), note(9, "c", "d")], 4);
        assert_eq!(app.last_id, 9);
    }

    #[test]
    fn test_from_config_takes_colors() {
        let config = ResolvedConfig {
            default_color: "yellow".to_string(),
            palette: vec!["yellow".to_string(), "blue".to_string()],
            ..ResolvedConfig::default()
        };
        let app = App::from_config(&config, Vec::new(), 0);
        assert_eq!(app.default_color, "yellow");
        assert_eq!(app.palette, vec!["yellow", "blue"]);
    }
}
