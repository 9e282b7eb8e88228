//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates terminal events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for an event,
//! drains everything already queued, then redraws once. Every accepted
//! mutation is written to the store before that redraw.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod colors;
mod component;
mod components;
mod event;
mod input;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::Effect;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::storage::{self, FileStore, KeyValueStore, MemoryStore};
use crate::tui::components::{ColorPickerState, EditDialogState, NoteForm, NoteListState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: NoteForm,
    pub list: NoteListState,
    /// Edit dialog overlay (None = hidden)
    pub editor: Option<EditDialogState>,
    /// Color picker tooltip (None = hidden)
    pub picker: Option<ColorPickerState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form: NoteForm::new(),
            list: NoteListState::new(),
            editor: None,
            picker: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

/// Open the store the resolved config points at.
pub fn open_store(config: &ResolvedConfig) -> Box<dyn KeyValueStore> {
    match &config.store_path {
        Some(path) => {
            info!("Using file store at {}", path.display());
            Box::new(FileStore::new(path.clone()))
        }
        None => {
            info!("Using in-memory store");
            Box::new(MemoryStore::new())
        }
    }
}

/// Write the collection. Failures are logged, never surfaced.
fn persist(store: &mut dyn KeyValueStore, key: &str, app: &App) {
    if let Err(e) = storage::save_notes(store, key, &app.notes, app.last_id) {
        warn!("Failed to save notes: {}", e);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut store = open_store(&config);
    let key = config.storage_key.clone();

    let notes = storage::load_notes(store.as_ref(), &key);
    let last_id = storage::load_last_id(store.as_ref(), &key, &notes);
    info!("Loaded {} notes (last id {})", notes.len(), last_id);

    let mut app = App::from_config(&config, notes, last_id);
    let mut tui = TuiState::new();

    // Initial write normalizes whatever was loaded
    persist(store.as_mut(), &key, &app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match input::handle_event(&mut app, &mut tui, &event) {
                Effect::Persist => {
                    persist(store.as_mut(), &key, &app);
                    tui.list.sync_len(app.notes.len());
                }
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::None => {}
            }
        }

        if should_quit {
            debug!("Quit requested");
            break;
        }
    }

    ratatui::restore();
    info!("Jotter shut down");
    Ok(())
}
