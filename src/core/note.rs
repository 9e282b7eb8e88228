//! # Notes
//!
//! The one record type the app knows about, plus its id type and the
//! color labels a note can carry.
//!
//! Ids are plain positive integers. Anything that arrives as text (a hit
//! test payload, a typed id) goes through `NoteId::from_str` so that
//! comparisons are always integer-to-integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color given to every freshly created note.
pub const DEFAULT_COLOR: &str = "white";

/// Labels offered by the color picker, in display order.
pub const DEFAULT_PALETTE: &[&str] = &[
    "white", "red", "orange", "yellow", "green", "teal", "blue", "darkblue", "purple", "pink",
    "brown", "gray",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl NoteId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteIdError(String);

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id: {:?}", self.0)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // u64::from_str accepts a leading '+', ids never carry one
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNoteIdError(s.to_string()));
        }
        match trimmed.parse::<u64>() {
            Ok(0) | Err(_) => Err(ParseNoteIdError(s.to_string())),
            Ok(n) => Ok(NoteId(n)),
        }
    }
}

/// A single note as stored and displayed.
///
/// Field names are the storage format: `{"id":1,"title":"","text":"","color":"white"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            color: color.into(),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_id() {
        assert_eq!("7".parse::<NoteId>(), Ok(NoteId(7)));
        assert_eq!(" 12 ".parse::<NoteId>(), Ok(NoteId(12)));
    }

    #[test]
    fn test_parse_note_id_rejects_garbage() {
        assert!("".parse::<NoteId>().is_err());
        assert!("0".parse::<NoteId>().is_err());
        assert!("-3".parse::<NoteId>().is_err());
        assert!("+3".parse::<NoteId>().is_err());
        assert!("1.0".parse::<NoteId>().is_err());
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_serializes_with_integer_id() {
        let note = Note::new(NoteId(3), "Shop", "milk", "red");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"id":3,"title":"Shop","text":"milk","color":"red"}"#);
    }

    #[test]
    fn test_note_missing_fields_get_defaults() {
        let note: Note = serde_json::from_str(r#"{"id":4}"#).unwrap();
        assert_eq!(note.title, "");
        assert_eq!(note.text, "");
        assert_eq!(note.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_default_palette_starts_with_default_color() {
        assert_eq!(DEFAULT_PALETTE[0], DEFAULT_COLOR);
    }
}
