//! # Edit Dialog Component
//!
//! Centered overlay for editing the targeted note's title and text.
//! Opened by clicking a card body (or `Enter` on the selected card).
//!
//! Closing it with `Esc` or the `[Close]` control commits the edit: the
//! parent turns `DialogEvent::Close` into `Action::Edit`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EditDialogState` lives in `TuiState` while the dialog is open
//! - `EditDialog` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::note::NoteId;
use crate::core::state::Target;
use crate::tui::colors;
use crate::tui::component::{Component, EventHandler, contains};
use crate::tui::components::TextField;
use crate::tui::components::text_field::FieldEvent;
use crate::tui::event::TuiEvent;

pub const CLOSE_LABEL: &str = "[Close]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogField {
    Title,
    Text,
}

/// Events emitted by the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// The dialog closed; the fields hold the edited values.
    Close { title: String, text: String },
}

/// Persistent state for the edit dialog overlay.
pub struct EditDialogState {
    pub id: NoteId,
    pub color: String,
    /// Stored title, returned as-is unless the title field is changed
    original_title: String,
    title_changed: bool,
    title: TextField,
    text: TextField,
    focus: DialogField,
    area: Rect,
    close_button: Rect,
}

impl EditDialogState {
    /// Prefill the fields from the current target.
    pub fn new(target: &Target, color: &str) -> Self {
        let mut title = TextField::single_line("Title");
        title.style = Style::default().add_modifier(Modifier::BOLD);
        title.set_value(&target.title);
        let mut text = TextField::multi_line("Note");
        text.set_value(&target.text);
        Self {
            id: target.id,
            color: color.to_string(),
            original_title: target.title.clone(),
            title_changed: false,
            title,
            text,
            focus: DialogField::Text,
            area: Rect::default(),
            close_button: Rect::default(),
        }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        contains(self.area, col, row)
    }

    fn close(&self) -> DialogEvent {
        let title = if self.title_changed {
            self.title.value()
        } else {
            self.original_title.as_str()
        };
        DialogEvent::Close {
            title: title.to_string(),
            text: self.text.value().to_string(),
        }
    }

    /// Clicks on `[Close]` close the dialog; clicks elsewhere inside move focus.
    pub fn click(&mut self, col: u16, row: u16) -> Option<DialogEvent> {
        if contains(self.close_button, col, row) {
            return Some(self.close());
        }
        if self.contains(col, row) {
            let title_row = self.area.y + 1;
            self.focus = if row <= title_row {
                DialogField::Title
            } else {
                DialogField::Text
            };
        }
        None
    }
}

impl EventHandler for EditDialogState {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(self.close()),
            TuiEvent::Tab => {
                self.focus = match self.focus {
                    DialogField::Title => DialogField::Text,
                    DialogField::Text => DialogField::Title,
                };
                None
            }
            TuiEvent::Submit if self.focus == DialogField::Title => {
                self.focus = DialogField::Text;
                None
            }
            TuiEvent::Submit => {
                self.text.handle_event(&TuiEvent::Newline);
                None
            }
            other => {
                match self.focus {
                    DialogField::Title => {
                        if self.title.handle_event(other) == Some(FieldEvent::Changed) {
                            self.title_changed = true;
                        }
                    }
                    DialogField::Text => {
                        self.text.handle_event(other);
                    }
                }
                None
            }
        }
    }
}

/// Transient render wrapper for the edit dialog overlay.
pub struct EditDialog<'a> {
    state: &'a mut EditDialogState,
}

impl<'a> EditDialog<'a> {
    pub fn new(state: &'a mut EditDialogState) -> Self {
        Self { state }
    }
}

impl<'a> Component for EditDialog<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);
        self.state.area = overlay;

        frame.render_widget(Clear, overlay);

        let style = colors::card_style(&self.state.color);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style.add_modifier(Modifier::BOLD))
            .style(style)
            .title(" Edit note ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Tab Switch  Ctrl+J Newline  Esc Done ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [title_area, _, text_area, controls_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let close_width = (CLOSE_LABEL.len() as u16).min(controls_area.width);
        self.state.close_button = Rect::new(
            controls_area.x + controls_area.width - close_width,
            controls_area.y,
            close_width,
            controls_area.height.min(1),
        );

        self.state.title.style = style.add_modifier(Modifier::BOLD);
        self.state.text.style = style;
        self.state.title.focused = self.state.focus == DialogField::Title;
        self.state.text.focused = self.state.focus == DialogField::Text;
        self.state.title.render(frame, title_area);
        self.state.text.render(frame, text_area);
        frame.render_widget(
            Paragraph::new(CLOSE_LABEL).style(style.fg(Color::DarkGray)),
            self.state.close_button,
        );
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn target() -> Target {
        Target {
            id: NoteId(3),
            title: "Shop".to_string(),
            text: "milk".to_string(),
        }
    }

    fn draw(state: &mut EditDialogState) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| EditDialog::new(state).render(f, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_prefilled_from_target() {
        let mut state = EditDialogState::new(&target(), "white");
        let text = draw(&mut state);
        assert!(text.contains("Edit note"));
        assert!(text.contains("Shop"));
        assert!(text.contains("milk"));
        assert!(text.contains(CLOSE_LABEL));
    }

    #[test]
    fn test_escape_commits_current_values() {
        let mut state = EditDialogState::new(&target(), "white");
        state.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(DialogEvent::Close {
                title: "Shop".to_string(),
                text: "milk!".to_string()
            })
        );
    }

    #[test]
    fn test_tab_edits_title() {
        let mut state = EditDialogState::new(&target(), "white");
        state.handle_event(&TuiEvent::Tab);
        state.handle_event(&TuiEvent::Backspace);
        assert_eq!(state.title.value(), "Sho");
        assert_eq!(state.text.value(), "milk");
    }

    #[test]
    fn test_unedited_multiline_title_is_kept() {
        let target = Target {
            id: NoteId(3),
            title: "a\nb".to_string(),
            text: "milk".to_string(),
        };
        let mut state = EditDialogState::new(&target, "white");
        state.handle_event(&TuiEvent::InputChar('!'));
        state.handle_event(&TuiEvent::Tab);
        state.handle_event(&TuiEvent::CursorHome);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(DialogEvent::Close {
                title: "a\nb".to_string(),
                text: "milk!".to_string()
            })
        );
    }

    #[test]
    fn test_edited_title_is_committed() {
        let target = Target {
            id: NoteId(3),
            title: "a\nb".to_string(),
            text: "milk".to_string(),
        };
        let mut state = EditDialogState::new(&target, "white");
        state.handle_event(&TuiEvent::Tab);
        state.handle_event(&TuiEvent::Backspace);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(DialogEvent::Close {
                title: "a ".to_string(),
                text: "milk".to_string()
            })
        );
    }

    #[test]
    fn test_close_control_commits() {
        let mut state = EditDialogState::new(&target(), "white");
        draw(&mut state);
        let close = state.close_button;
        assert_eq!(
            state.click(close.x, close.y),
            Some(DialogEvent::Close {
                title: "Shop".to_string(),
                text: "milk".to_string()
            })
        );
    }

    #[test]
    fn test_click_inside_does_not_close() {
        let mut state = EditDialogState::new(&target(), "white");
        draw(&mut state);
        let area = state.area;
        assert_eq!(state.click(area.x + 2, area.y + 1), None);
        assert_eq!(state.focus, DialogField::Title);
    }
}
