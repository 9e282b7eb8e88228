use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ColorPicker, EditDialog, NoteList, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

/// Screen areas of one frame, top to bottom.
pub struct ScreenLayout {
    pub title: Rect,
    pub form: Rect,
    pub list: Rect,
    pub help: Rect,
}

pub fn screen_layout(area: Rect, form_height: u16) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, form, list, help] =
        Layout::vertical([Length(1), Length(form_height), Min(0), Length(1)]).areas(area);
    ScreenLayout {
        title,
        form,
        list,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();
    let layout = screen_layout(area, tui.form.height(area.width));

    TitleBar::new(app.notes.len(), app.status_message.clone()).render(frame, layout.title);
    tui.form.render(frame, layout.form);
    NoteList::new(&mut tui.list, &app.notes).render(frame, layout.list);
    frame.render_widget(
        Paragraph::new(help_text(tui)).style(Style::default().fg(Color::DarkGray)),
        layout.help,
    );

    // Overlays last so they draw on top
    if let Some(picker) = tui.picker.as_mut() {
        ColorPicker::new(picker).render(frame, area);
    }
    if let Some(editor) = tui.editor.as_mut() {
        EditDialog::new(editor).render(frame, area);
    }
}

fn help_text(tui: &TuiState) -> &'static str {
    if tui.editor.is_some() {
        " Tab Switch field  Ctrl+J Newline  Esc Done"
    } else if tui.picker.is_some() {
        " ←/→ Choose  Enter Apply  Esc Close"
    } else if tui.form.open {
        " Tab Switch field  Ctrl+J Newline  Enter Add  Esc Done"
    } else {
        " n New  ↑/↓ Select  Enter Edit  c Color  d Delete  q Quit"
    }
}
