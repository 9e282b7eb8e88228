//! # Note Storage
//!
//! Persist the note collection in a key-value store shaped like browser
//! local storage: string keys, string values, whole-value overwrites.
//!
//! ```text
//! storage.json
//! {
//!   "notes":         "[{\"id\":1,\"title\":\"Shop\",\"text\":\"milk\",\"color\":\"white\"}]",
//!   "notes.last-id": "1"
//! }
//! ```
//!
//! The collection slot is read once at startup and rewritten in full after
//! every mutation. Anything unreadable in it loads as an empty collection.
//! File writes use atomic rename (write `.tmp`, then `rename()`).

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::collection;
use crate::core::note::Note;

/// Default slot holding the serialized collection.
pub const DEFAULT_KEY: &str = "notes";
/// File name of the default store inside `~/.jotter/`.
pub const STORE_FILE: &str = "storage.json";

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
            StoreError::Parse(e) => write!(f, "storage parse error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e)
    }
}

/// String-to-string storage with whole-value reads and writes.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and `--ephemeral` runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }
}

/// A store backed by one JSON object file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file. Missing → empty. Unparseable → empty, with a warning.
    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&json) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Ignoring malformed store {}: {}", self.path.display(), e);
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        atomic_write_json(&self.path, items)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Returns `~/.jotter/storage.json`.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jotter").join(STORE_FILE))
}

fn last_id_key(key: &str) -> String {
    format!("{key}.last-id")
}

pub fn serialize_notes(notes: &[Note]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(notes)?)
}

pub fn deserialize_notes(json: &str) -> Result<Vec<Note>, StoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Load the collection from `key`. Never fails: missing, unreadable, or
/// malformed data all come back as an empty collection.
pub fn load_notes(store: &dyn KeyValueStore, key: &str) -> Vec<Note> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored notes under {:?}", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read notes: {}", e);
            return Vec::new();
        }
    };
    match deserialize_notes(&raw) {
        Ok(notes) if has_unique_ids(&notes) => notes,
        Ok(_) => {
            warn!("Stored notes under {:?} have duplicate ids, starting empty", key);
            Vec::new()
        }
        Err(e) => {
            warn!("Stored notes under {:?} are malformed, starting empty: {}", key, e);
            Vec::new()
        }
    }
}

fn has_unique_ids(notes: &[Note]) -> bool {
    let mut ids: Vec<_> = notes.iter().map(|n| n.id).collect();
    ids.sort_unstable();
    ids.windows(2).all(|w| w[0] != w[1])
}

/// Load the id high-water mark. Missing or malformed → highest stored id.
pub fn load_last_id(store: &dyn KeyValueStore, key: &str, notes: &[Note]) -> u64 {
    let stored = store
        .get_item(&last_id_key(key))
        .ok()
        .flatten()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0);
    stored.max(collection::max_id(notes))
}

/// Overwrite the collection slot and the high-water mark.
pub fn save_notes(
    store: &mut dyn KeyValueStore,
    key: &str,
    notes: &[Note],
    last_id: u64,
) -> Result<(), StoreError> {
    store.set_item(key, &serialize_notes(notes)?)?;
    store.set_item(&last_id_key(key), &last_id.to_string())?;
    debug!("Saved {} notes under {:?}", notes.len(), key);
    Ok(())
}
