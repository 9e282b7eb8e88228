//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: app name, note count, status message
//! - `NoteCard`: one note as a tinted card with its toolbar
//! - `Placeholder`: the empty-collection message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextField`: editable buffer used by the form and the dialog
//! - `NoteForm`: the creation form (closed/open)
//! - `NoteList`: scrollable cards with hit testing
//! - `EditDialog`: overlay editing the targeted note
//! - `ColorPicker`: swatch tooltip anchored to a card's color icon
//!
//! Overlays and the list follow the persistent state + transient wrapper
//! pattern: the `*State` struct lives in `TuiState`, the wrapper is built
//! each frame with borrowed state and props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── text_field/      (buffer, cursor, wrapping)
//! ├── note_form.rs
//! ├── note_card.rs
//! ├── note_list.rs
//! ├── placeholder.rs
//! ├── edit_dialog.rs
//! └── color_picker.rs
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod color_picker;
pub mod edit_dialog;
pub mod note_card;
pub mod note_form;
pub mod note_list;
mod placeholder;
pub mod text_field;

pub use color_picker::{ColorPicker, ColorPickerState, PickerEvent};
pub use edit_dialog::{DialogEvent, EditDialog, EditDialogState};
pub use note_card::NoteCard;
pub use note_form::{FormEvent, NoteForm};
pub use note_list::{ListHit, NoteList, NoteListState};
pub use placeholder::Placeholder;
pub use text_field::TextField;
