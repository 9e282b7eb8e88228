//! Terminal events → core actions.
//!
//! `handle_event` routes one `TuiEvent` to whichever surface owns it and
//! dispatches the resulting actions. Mouse routing relies on the hit areas
//! recorded by the previous draw.
//!
//! ## Routing order
//!
//! ```text
//! ForceQuit ─▶ Quit
//! Resize    ─▶ redraw only
//! MouseMove ─▶ color picker hover (show on [color], hide on leave)
//! Click     ─▶ edit dialog ▸ color picker ▸ form ▸ note list
//! Scroll    ─▶ note list
//! Keys      ─▶ edit dialog ▸ color picker ▸ form ▸ list mode
//! ```

use log::debug;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::note::NoteId;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ColorPickerState, DialogEvent, EditDialogState, FormEvent, ListHit, NoteList, PickerEvent,
};
use crate::tui::event::TuiEvent;

/// Dispatch one event. Returns the strongest effect produced: `Quit` over
/// `Persist` over `None`.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::MouseMove(col, row) => {
            hover(app, tui, *col, *row);
            Effect::None
        }
        TuiEvent::MouseClick(col, row) => click(app, tui, *col, *row),
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            NoteList::new(&mut tui.list, &app.notes).handle_event(event);
            Effect::None
        }
        _ => key(app, tui, event),
    }
}

fn strongest(a: Effect, b: Effect) -> Effect {
    match (a, b) {
        (Effect::Quit, _) | (_, Effect::Quit) => Effect::Quit,
        (Effect::Persist, _) | (_, Effect::Persist) => Effect::Persist,
        _ => Effect::None,
    }
}

fn open_editor(app: &mut App, tui: &mut TuiState, id: NoteId) {
    update(app, Action::Select(id));
    tui.list.select_id(id);
    let color = app
        .notes
        .iter()
        .find(|n| n.id == id)
        .map(|n| n.color.as_str())
        .unwrap_or(app.default_color.as_str());
    tui.picker = None;
    tui.editor = app
        .target
        .as_ref()
        .map(|target| EditDialogState::new(target, color));
}

/// Target the note and hang the picker off its color icon.
fn open_picker(app: &mut App, tui: &mut TuiState, id: NoteId, anchor: Rect, pinned: bool) {
    update(app, Action::Select(id));
    tui.list.select_id(id);
    let current = app
        .notes
        .iter()
        .find(|n| n.id == id)
        .map(|n| n.color.as_str())
        .unwrap_or_default();
    let picker = ColorPickerState::new(id, anchor, &app.palette, current);
    tui.picker = Some(if pinned { picker.pinned() } else { picker });
}

fn hover(app: &mut App, tui: &mut TuiState, col: u16, row: u16) {
    if tui.editor.is_some() {
        return;
    }
    if let Some(ListHit::ColorIcon(id, anchor)) = tui.list.hit_test(col, row) {
        let already_open = tui.picker.as_ref().is_some_and(|p| p.id == id);
        if !already_open {
            debug!("Showing color picker for note {}", id);
            open_picker(app, tui, id, anchor, false);
        }
        return;
    }
    if let Some(picker) = &tui.picker
        && !picker.pinned
        && !picker.is_hovered(col, row)
    {
        tui.picker = None;
    }
}

fn click(app: &mut App, tui: &mut TuiState, col: u16, row: u16) -> Effect {
    // The edit dialog is modal
    if let Some(editor) = tui.editor.as_mut() {
        return match editor.click(col, row) {
            Some(dialog_event) => close_editor(app, tui, dialog_event),
            None => Effect::None,
        };
    }

    if let Some(picker) = tui.picker.as_mut()
        && picker.contains(col, row)
    {
        return match picker.click(col, row) {
            Some(PickerEvent::Apply(color)) => update(app, Action::Recolor(color)),
            Some(PickerEvent::Close) => {
                tui.picker = None;
                Effect::None
            }
            None => Effect::None,
        };
    }

    let in_form = tui.form.contains(col, row);
    let effect = match tui.form.click(col, row) {
        Some(form_event) => form_done(app, tui, form_event),
        None => Effect::None,
    };
    if in_form {
        return effect;
    }

    let list_effect = match tui.list.hit_test(col, row) {
        Some(ListHit::Body(id)) => {
            open_editor(app, tui, id);
            Effect::None
        }
        Some(ListHit::DeleteIcon(id)) => {
            tui.picker = None;
            update(app, Action::Delete(id))
        }
        Some(ListHit::ColorIcon(id, anchor)) => {
            open_picker(app, tui, id, anchor, false);
            Effect::None
        }
        None => Effect::None,
    };
    strongest(effect, list_effect)
}

fn close_editor(app: &mut App, tui: &mut TuiState, event: DialogEvent) -> Effect {
    if let Some(editor) = tui.editor.take() {
        debug!("Edit dialog closed for note {}", editor.id);
    }
    match event {
        DialogEvent::Close { title, text } => update(app, Action::Edit { title, text }),
    }
}

fn form_done(app: &mut App, tui: &mut TuiState, event: FormEvent) -> Effect {
    match event {
        FormEvent::Submit { title, text } => {
            let effect = update(app, Action::Create { title, text });
            tui.form.close();
            effect
        }
        FormEvent::Closed => Effect::None,
    }
}

fn key(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    if let Some(editor) = tui.editor.as_mut() {
        return match editor.handle_event(event) {
            Some(dialog_event) => close_editor(app, tui, dialog_event),
            None => Effect::None,
        };
    }

    if let Some(picker) = tui.picker.as_mut() {
        return match picker.handle_event(event) {
            Some(PickerEvent::Apply(color)) => update(app, Action::Recolor(color)),
            Some(PickerEvent::Close) => {
                tui.picker = None;
                Effect::None
            }
            None => Effect::None,
        };
    }

    if tui.form.open {
        return match tui.form.handle_event(event) {
            Some(form_event) => form_done(app, tui, form_event),
            None => Effect::None,
        };
    }

    match event {
        TuiEvent::InputChar('n') | TuiEvent::InputChar('i') => {
            tui.form.open();
            Effect::None
        }
        TuiEvent::InputChar('q') | TuiEvent::Escape => update(app, Action::Quit),
        TuiEvent::InputChar('d') => match tui.list.selected_id() {
            Some(id) => update(app, Action::Delete(id)),
            None => Effect::None,
        },
        TuiEvent::InputChar('c') => {
            if let Some(id) = tui.list.selected_id()
                && let Some(anchor) = tui.list.selected_color_icon()
            {
                open_picker(app, tui, id, anchor, true);
            }
            Effect::None
        }
        TuiEvent::Submit => {
            if let Some(id) = tui.list.selected_id() {
                open_editor(app, tui, id);
            }
            Effect::None
        }
        _ => {
            NoteList::new(&mut tui.list, &app.notes).handle_event(event);
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, note, test_app};
    use crate::tui::ui;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    struct Harness {
        app: App,
        tui: TuiState,
        terminal: Terminal<TestBackend>,
    }

    impl Harness {
        fn new(app: App) -> Self {
            let mut harness = Self {
                app,
                tui: TuiState::new(),
                terminal: Terminal::new(TestBackend::new(50, 24)).unwrap(),
            };
            harness.draw();
            harness
        }

        fn draw(&mut self) -> String {
            let (app, tui) = (&self.app, &mut self.tui);
            self.terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
            buffer_text(self.terminal.backend().buffer())
        }

        /// Send one event and redraw, like one loop iteration.
        fn send(&mut self, event: TuiEvent) -> Effect {
            let effect = handle_event(&mut self.app, &mut self.tui, &event);
            if effect == Effect::Persist {
                self.tui.list.sync_len(self.app.notes.len());
            }
            self.draw();
            effect
        }

        fn type_str(&mut self, s: &str) {
            for c in s.chars() {
                self.send(TuiEvent::InputChar(c));
            }
        }
    }

    fn with_notes(notes: Vec<crate::core::note::Note>) -> Harness {
        let mut app = test_app();
        app.last_id = crate::core::collection::max_id(&notes);
        app.notes = notes;
        Harness::new(app)
    }

    #[test]
    fn test_force_quit_always_quits() {
        let mut h = with_notes(vec![]);
        h.send(TuiEvent::InputChar('n'));
        assert_eq!(h.send(TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_keyboard_create_flow() {
        let mut h = with_notes(vec![]);
        h.send(TuiEvent::InputChar('n'));
        assert!(h.tui.form.open);
        h.send(TuiEvent::Tab);
        h.type_str("Shop");
        h.send(TuiEvent::Tab);
        h.type_str("milk");
        assert_eq!(h.send(TuiEvent::Submit), Effect::Persist);
        assert!(!h.tui.form.open);
        assert_eq!(h.app.notes, vec![note(1, "Shop", "milk")]);
        assert!(h.draw().contains("Note added"));
    }

    #[test]
    fn test_enter_in_form_title_creates() {
        let mut h = with_notes(vec![]);
        h.send(TuiEvent::InputChar('n'));
        h.send(TuiEvent::Tab);
        h.type_str("Shop");
        assert_eq!(h.send(TuiEvent::Submit), Effect::Persist);
        assert!(!h.tui.form.open);
        assert_eq!(h.app.notes, vec![note(1, "Shop", "")]);
    }

    #[test]
    fn test_click_outside_form_creates() {
        let mut h = with_notes(vec![]);
        h.send(TuiEvent::MouseClick(5, 2));
        assert!(h.tui.form.open);
        h.type_str("milk");
        assert_eq!(h.send(TuiEvent::MouseClick(5, 20)), Effect::Persist);
        assert_eq!(h.app.notes.len(), 1);
        assert_eq!(h.app.notes[0].text, "milk");
        assert!(!h.tui.form.open);
    }

    #[test]
    fn test_click_outside_empty_form_creates_nothing() {
        let mut h = with_notes(vec![]);
        h.send(TuiEvent::MouseClick(5, 2));
        assert_eq!(h.send(TuiEvent::MouseClick(5, 20)), Effect::None);
        assert!(h.app.notes.is_empty());
        assert!(!h.tui.form.open);
    }

    #[test]
    fn test_click_body_opens_dialog_and_close_commits() {
        let mut h = with_notes(vec![note(1, "Shop", "milk")]);
        // title 1 row + closed form 3 rows → first card starts at row 4
        h.send(TuiEvent::MouseClick(5, 5));
        assert!(h.tui.editor.is_some());
        assert_eq!(h.app.target_id(), Some(NoteId(1)));

        // typing goes to the dialog's text field
        h.type_str(", eggs");
        assert_eq!(h.send(TuiEvent::Escape), Effect::Persist);
        assert!(h.tui.editor.is_none());
        assert_eq!(h.app.notes[0].text, "milk, eggs");
        assert_eq!(h.app.notes[0].title, "Shop");
    }

    #[test]
    fn test_click_outside_dialog_is_ignored() {
        let mut h = with_notes(vec![note(1, "Shop", "milk")]);
        h.send(TuiEvent::MouseClick(5, 5));
        assert_eq!(h.send(TuiEvent::MouseClick(0, 0)), Effect::None);
        assert!(h.tui.editor.is_some());
    }

    #[test]
    fn test_click_delete_icon() {
        let mut h = with_notes(vec![note(1, "Shop", "milk"), note(2, "", "call")]);
        // first card toolbar row: 4 + 3
        assert_eq!(h.send(TuiEvent::MouseClick(2, 7)), Effect::Persist);
        assert_eq!(h.app.notes, vec![note(2, "", "call")]);
        assert!(h.draw().contains("Note deleted"));
    }

    #[test]
    fn test_hover_color_icon_shows_picker_and_swatch_recolors() {
        let mut h = with_notes(vec![note(1, "Shop", "milk")]);
        h.send(TuiEvent::MouseMove(11, 7));
        let picker = h.tui.picker.as_ref().unwrap();
        assert_eq!(picker.id, NoteId(1));
        let picker_area = picker.placement(Rect::new(0, 0, 50, 24));

        // moving onto the tooltip keeps it open; second swatch is red
        let swatch = (picker_area.x + 4, picker_area.y + 1);
        h.send(TuiEvent::MouseMove(swatch.0, swatch.1));
        assert!(h.tui.picker.is_some());
        assert_eq!(h.send(TuiEvent::MouseClick(swatch.0, swatch.1)), Effect::Persist);
        assert_eq!(h.app.notes[0].color, "red");
        assert!(h.tui.picker.is_some());

        // leaving both icon and tooltip hides it
        h.send(TuiEvent::MouseMove(45, 20));
        assert!(h.tui.picker.is_none());
    }

    #[test]
    fn test_keyboard_picker_is_pinned() {
        let mut h = with_notes(vec![note(1, "Shop", "milk")]);
        h.send(TuiEvent::CursorDown);
        h.send(TuiEvent::InputChar('c'));
        assert!(h.tui.picker.as_ref().is_some_and(|p| p.pinned));
        h.send(TuiEvent::MouseMove(45, 20));
        assert!(h.tui.picker.is_some());

        h.send(TuiEvent::CursorRight);
        assert_eq!(h.send(TuiEvent::Submit), Effect::Persist);
        assert_eq!(h.app.notes[0].color, "red");
        assert!(h.draw().contains("Color set to red"));
        h.send(TuiEvent::Escape);
        assert!(h.tui.picker.is_none());
    }

    #[test]
    fn test_keyboard_select_edit_delete() {
        let mut h = with_notes(vec![note(1, "Shop", "milk"), note(2, "", "call")]);
        h.send(TuiEvent::CursorDown);
        h.send(TuiEvent::CursorDown);
        h.send(TuiEvent::Submit);
        assert_eq!(h.app.target_id(), Some(NoteId(2)));
        h.send(TuiEvent::Tab);
        h.type_str("Phone");
        h.send(TuiEvent::Escape);
        assert_eq!(h.app.notes[1].title, "Phone");

        assert_eq!(h.send(TuiEvent::InputChar('d')), Effect::Persist);
        assert_eq!(h.app.notes, vec![note(1, "Shop", "milk")]);
        assert_eq!(h.tui.list.selected_index, Some(0));
    }

    #[test]
    fn test_q_quits_from_list_but_types_in_form() {
        let mut h = with_notes(vec![]);
        h.send(TuiEvent::InputChar('n'));
        assert_eq!(h.send(TuiEvent::InputChar('q')), Effect::None);
        assert_eq!(h.tui.form.text.value(), "q");
        h.send(TuiEvent::Escape);
        assert_eq!(h.send(TuiEvent::InputChar('q')), Effect::Quit);
    }

    #[test]
    fn test_strongest_effect() {
        assert_eq!(strongest(Effect::None, Effect::Persist), Effect::Persist);
        assert_eq!(strongest(Effect::Persist, Effect::Quit), Effect::Quit);
        assert_eq!(strongest(Effect::None, Effect::None), Effect::None);
    }
}
