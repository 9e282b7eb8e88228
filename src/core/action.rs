//! # Actions
//!
//! Everything that can happen to the note collection becomes an `Action`.
//! User fills the form and clicks away? That's `Action::Create { .. }`.
//! User clicks a swatch? That's `Action::Recolor(color)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what I/O to perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every accepted mutation returns `Effect::Persist`: the adapter writes the
//! whole collection to storage and redraws the whole list.

use log::{debug, info, warn};

use crate::core::collection;
use crate::core::note::{Note, NoteId};
use crate::core::state::{App, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a note from the creation form. Ignored if both fields are empty.
    Create { title: String, text: String },
    /// Remember a note as the target of the next edit/recolor.
    Select(NoteId),
    /// Replace title and text of the targeted note.
    Edit { title: String, text: String },
    /// Replace the color of the targeted note.
    Recolor(String),
    /// Drop a note. Unknown ids are fine.
    Delete(NoteId),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the collection to storage, then redraw.
    Persist,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Create { title, text } => {
            if collection::is_blank(&title, &text) {
                debug!("Ignoring blank note");
                return Effect::None;
            }
            let Some(id) = collection::next_id(&app.notes, app.last_id) else {
                warn!("Note ids exhausted, ignoring create");
                app.status_message = String::from("No note ids left");
                return Effect::None;
            };
            let note = Note::new(id, title, text, app.default_color.clone());
            app.notes = collection::append(std::mem::take(&mut app.notes), note);
            app.last_id = id.get();
            app.status_message = String::from("Note added");
            info!("Created note {}", id);
            Effect::Persist
        }
        Action::Select(id) => {
            app.target = collection::find(&app.notes, id).map(|note| Target {
                id: note.id,
                title: note.title.clone(),
                text: note.text.clone(),
            });
            Effect::None
        }
        Action::Edit { title, text } => {
            if let Some(target) = app.target.as_mut() {
                app.notes =
                    collection::edit(std::mem::take(&mut app.notes), target.id, &title, &text);
                target.title = title;
                target.text = text;
                app.status_message = String::from("Note updated");
                info!("Edited note {}", target.id);
            }
            Effect::Persist
        }
        Action::Recolor(color) => {
            if let Some(id) = app.target_id() {
                app.notes = collection::recolor(std::mem::take(&mut app.notes), id, &color);
                app.status_message = format!("Color set to {color}");
                info!("Recolored note {} to {}", id, color);
            }
            Effect::Persist
        }
        Action::Delete(id) => {
            let before = app.notes.len();
            app.notes = collection::remove(std::mem::take(&mut app.notes), id);
            if app.notes.len() != before {
                app.status_message = String::from("Note deleted");
                info!("Deleted note {}", id);
            }
            if app.target_id() == Some(id) {
                app.target = None;
            }
            Effect::Persist
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{note, test_app};

    fn create(app: &mut App, title: &str, text: &str) -> Effect {
        update(
            app,
            Action::Create {
                title: title.to_string(),
                text: text.to_string(),
            },
        )
    }

    #[test]
    fn test_create_blank_is_ignored() {
        let mut app = test_app();
        assert_eq!(create(&mut app, "", ""), Effect::None);
        assert!(app.notes.is_empty());
        assert_eq!(app.last_id, 0);
    }

    #[test]
    fn test_create_appends_with_fresh_id() {
        let mut app = test_app();
        assert_eq!(create(&mut app, "A", "b"), Effect::Persist);
        assert_eq!(app.notes, vec![note(1, "A", "b")]);

        create(&mut app, "", "only text");
        assert_eq!(app.notes.len(), 2);
        assert_eq!(app.notes[1].id, NoteId(2));
        assert_eq!(app.notes[1].color, "white");
    }

    #[test]
    fn test_create_after_max_id() {
        let mut app = App::new(vec![note(4, "a", ""), note(2, "b", "")], 0);
        create(&mut app, "A", "b");
        assert_eq!(app.notes[2].id, NoteId(5));
    }

    #[test]
    fn test_create_with_ids_exhausted_is_ignored() {
        let mut app = App::new(vec![note(u64::MAX, "a", "")], 0);
        assert_eq!(create(&mut app, "A", "b"), Effect::None);
        assert_eq!(app.notes, vec![note(u64::MAX, "a", "")]);
        assert_eq!(app.last_id, 0);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut app = test_app();
        create(&mut app, "one", "");
        create(&mut app, "two", "");
        update(&mut app, Action::Delete(NoteId(2)));
        create(&mut app, "three", "");
        let ids: Vec<u64> = app.notes.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_select_captures_current_fields() {
        let mut app = App::new(vec![note(1, "Shop", "milk")], 0);
        assert_eq!(update(&mut app, Action::Select(NoteId(1))), Effect::None);
        let target = app.target.clone().unwrap();
        assert_eq!(target.id, NoteId(1));
        assert_eq!(target.title, "Shop");
        assert_eq!(target.text, "milk");
    }

    #[test]
    fn test_select_unknown_clears_target() {
        let mut app = App::new(vec![note(1, "Shop", "milk")], 0);
        update(&mut app, Action::Select(NoteId(1)));
        update(&mut app, Action::Select(NoteId(8)));
        assert!(app.target.is_none());
    }

    #[test]
    fn test_edit_applies_to_target_only() {
        let mut app = App::new(vec![note(1, "a", "b"), note(2, "c", "d")], 0);
        update(&mut app, Action::Recolor("red".into()));
        update(&mut app, Action::Select(NoteId(2)));
        update(
            &mut app,
            Action::Edit {
                title: "X".into(),
                text: "Y".into(),
            },
        );
        assert_eq!(app.notes[0], note(1, "a", "b"));
        assert_eq!(app.notes[1].title, "X");
        assert_eq!(app.notes[1].text, "Y");
        assert_eq!(app.notes[1].color, "white");
    }

    #[test]
    fn test_edit_without_target_is_noop() {
        let mut app = App::new(vec![note(1, "a", "b")], 0);
        update(
            &mut app,
            Action::Edit {
                title: "X".into(),
                text: "Y".into(),
            },
        );
        assert_eq!(app.notes, vec![note(1, "a", "b")]);
    }

    #[test]
    fn test_recolor_changes_only_color() {
        let mut app = App::new(vec![note(1, "a", "b"), note(2, "c", "d")], 0);
        update(&mut app, Action::Select(NoteId(1)));
        update(&mut app, Action::Recolor("blue".into()));
        assert_eq!(app.notes[0].color, "blue");
        assert_eq!(app.notes[0].title, "a");
        assert_eq!(app.notes[1], note(2, "c", "d"));
        assert_eq!(app.status_message, "Color set to blue");
    }

    #[test]
    fn test_delete_clears_matching_target() {
        let mut app = App::new(vec![note(1, "a", "b")], 0);
        update(&mut app, Action::Select(NoteId(1)));
        update(&mut app, Action::Delete(NoteId(1)));
        assert!(app.notes.is_empty());
        assert!(app.target.is_none());
    }

    #[test]
    fn test_delete_unknown_leaves_collection() {
        let mut app = App::new(vec![note(1, "a", "b")], 0);
        let before = serde_json::to_string(&app.notes).unwrap();
        update(&mut app, Action::Delete(NoteId(3)));
        assert_eq!(serde_json::to_string(&app.notes).unwrap(), before);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
