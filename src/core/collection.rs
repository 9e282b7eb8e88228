//! # Collection Transformations
//!
//! Pure `Vec<Note> → Vec<Note>` functions. Each one takes the whole
//! collection and hands back the whole collection, matching how the app
//! persists and redraws: never a partial update.
//!
//! ```text
//! notes ──append()──▶ notes'     (new note at the end)
//! notes ──edit()────▶ notes'     (map: replace title/text of one id)
//! notes ──recolor()─▶ notes'     (map: replace color of one id)
//! notes ──remove()──▶ notes'     (filter: drop one id)
//! ```
//!
//! An id that matches nothing is not an error; the input comes back as-is.

use crate::core::note::{Note, NoteId};

/// True when a draft has neither a title nor a text and must not become a note.
pub fn is_blank(title: &str, text: &str) -> bool {
    title.is_empty() && text.is_empty()
}

/// Highest id present in the collection, 0 when empty.
pub fn max_id(notes: &[Note]) -> u64 {
    notes.iter().map(|n| n.id.get()).max().unwrap_or(0)
}

/// Next id to hand out.
///
/// `last_id` is the highest id ever assigned (it survives deletions), so
/// deleting the newest note never frees its id for reuse. `None` once
/// `u64::MAX` has been handed out.
pub fn next_id(notes: &[Note], last_id: u64) -> Option<NoteId> {
    max_id(notes).max(last_id).checked_add(1).map(NoteId)
}

pub fn find(notes: &[Note], id: NoteId) -> Option<&Note> {
    notes.iter().find(|n| n.id == id)
}

pub fn append(mut notes: Vec<Note>, note: Note) -> Vec<Note> {
    notes.push(note);
    notes
}

pub fn edit(notes: Vec<Note>, id: NoteId, title: &str, text: &str) -> Vec<Note> {
    notes
        .into_iter()
        .map(|note| {
            if note.id == id {
                Note {
                    title: title.to_string(),
                    text: text.to_string(),
                    ..note
                }
            } else {
                note
            }
        })
        .collect()
}

pub fn recolor(notes: Vec<Note>, id: NoteId, color: &str) -> Vec<Note> {
    notes
        .into_iter()
        .map(|note| {
            if note.id == id {
                Note {
                    color: color.to_string(),
                    ..note
                }
            } else {
                note
            }
        })
        .collect()
}

pub fn remove(notes: Vec<Note>, id: NoteId) -> Vec<Note> {
    notes.into_iter().filter(|note| note.id != id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::note::DEFAULT_COLOR;

    fn sample() -> Vec<Note> {
        vec![
            Note::new(NoteId(1), "Shop", "milk", DEFAULT_COLOR),
            Note::new(NoteId(2), "", "call mum", "yellow"),
            Note::new(NoteId(5), "Ideas", "", "teal"),
        ]
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank("", ""));
        assert!(!is_blank("A", ""));
        assert!(!is_blank("", "b"));
        // Whitespace is content, only truly empty drafts are rejected
        assert!(!is_blank(" ", ""));
    }

    #[test]
    fn test_next_id_empty_collection() {
        assert_eq!(next_id(&[], 0), Some(NoteId(1)));
    }

    #[test]
    fn test_next_id_uses_max_not_last() {
        let mut notes = sample();
        notes.swap(0, 2);
        assert_eq!(next_id(&notes, 0), Some(NoteId(6)));
    }

    #[test]
    fn test_next_id_respects_high_water_mark() {
        let notes = remove(sample(), NoteId(5));
        assert_eq!(next_id(&notes, 5), Some(NoteId(6)));
    }

    #[test]
    fn test_next_id_exhausted() {
        assert_eq!(next_id(&[], u64::MAX), None);
        let notes = vec![Note::new(NoteId(u64::MAX), "a", "", DEFAULT_COLOR)];
        assert_eq!(next_id(&notes, 0), None);
        assert_eq!(next_id(&[], u64::MAX - 1), Some(NoteId(u64::MAX)));
    }

    #[test]
    fn test_append_keeps_order() {
        let notes = append(sample(), Note::new(NoteId(6), "new", "", DEFAULT_COLOR));
        let ids: Vec<u64> = notes.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_edit_touches_only_target() {
        let before = sample();
        let after = edit(before.clone(), NoteId(2), "X", "Y");
        assert_eq!(after[1].title, "X");
        assert_eq!(after[1].text, "Y");
        assert_eq!(after[1].color, "yellow");
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        assert_eq!(edit(sample(), NoteId(42), "X", "Y"), sample());
    }

    #[test]
    fn test_recolor_touches_only_color() {
        let after = recolor(sample(), NoteId(1), "blue");
        assert_eq!(after[0].color, "blue");
        assert_eq!(after[0].title, "Shop");
        assert_eq!(after[0].text, "milk");
        assert_eq!(&after[1..], &sample()[1..]);
    }

    #[test]
    fn test_remove() {
        let after = remove(sample(), NoteId(2));
        assert_eq!(after.len(), 2);
        assert!(find(&after, NoteId(2)).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let before = serde_json::to_string(&sample()).unwrap();
        let after = serde_json::to_string(&remove(sample(), NoteId(99))).unwrap();
        assert_eq!(before, after);
    }
}
