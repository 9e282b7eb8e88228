//! Cursor position tracking and navigation for `TextField`.
//!
//! `CursorState` owns the cursor byte offset and the scroll offset. All
//! methods take `buffer: &str` explicitly; the text is owned by `TextField`.

use super::text_wrap::{wrap_line_count, wrap_options};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits)
    pub scroll_offset: u16,
    /// Content width from last render (used for vertical movement)
    pub last_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 40;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Put the cursor at the end of `buffer` (used when a field is prefilled).
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
        self.scroll_offset = 0;
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Move cursor up or down one wrapped line, keeping the column where possible.
    ///
    /// Returns `true` if the cursor moved, `false` if already at the boundary.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16) -> bool {
        let width = self.last_width;
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        // Byte length of a wrapped line including its trailing newline (if present)
        let line_byte_span = |line: &str, offset: usize| -> usize {
            let has_newline = offset + line.len() < buffer.len()
                && buffer.as_bytes()[offset + line.len()] == b'\n';
            line.len() + usize::from(has_newline)
        };

        let mut byte_offset = 0;
        let mut current_line_idx = 0;
        let mut column_in_line = 0;

        for (idx, line) in lines.iter().enumerate() {
            if byte_offset + line.len() >= self.pos {
                current_line_idx = idx;
                column_in_line = self.pos - byte_offset;
                break;
            }
            byte_offset += line_byte_span(line, byte_offset);
        }

        let target_line_idx = if direction < 0 {
            if current_line_idx == 0 {
                return false;
            }
            current_line_idx - 1
        } else {
            if current_line_idx >= lines.len() - 1 {
                return false;
            }
            current_line_idx + 1
        };

        let mut target_line_start = 0;
        for line in lines.iter().take(target_line_idx) {
            target_line_start += line_byte_span(line, target_line_start);
        }

        let target_line = &lines[target_line_idx];
        let mut target_column = column_in_line.min(target_line.len());
        while !target_line.is_char_boundary(target_column) {
            target_column -= 1;
        }
        self.pos = target_line_start + target_column;

        true
    }

    /// Which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }

        let text_before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        // Cursor right after a newline that textwrap didn't represent
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        cursor_line
    }

    /// Keep the cursor line inside a viewport of `max_lines` lines.
    pub fn update_scroll_offset(&mut self, buffer: &str, width: u16, max_lines: u16) {
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= max_lines {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + max_lines {
            self.scroll_offset = cursor_line.saturating_sub(max_lines - 1);
        }
    }

    /// Screen position of the cursor for text laid out in `area` (no border).
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = area.width;
        if width == 0 {
            return (area.x, area.y);
        }

        let options = wrap_options(width);
        let cursor_line = self.calculate_line(buffer, width);

        // Measure from the last newline: textwrap trims trailing spaces
        let text_before_cursor = &buffer[..self.pos];
        let last_newline = text_before_cursor
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        let logical_line_to_cursor = &text_before_cursor[last_newline..];
        let logical_line_wrapped = textwrap::wrap(logical_line_to_cursor, options);

        let cursor_col = if logical_line_wrapped.is_empty() {
            0
        } else {
            let width_of_prev_segments: usize = logical_line_wrapped
                .iter()
                .take(logical_line_wrapped.len() - 1)
                .map(|seg| seg.width())
                .sum();
            let total_width = logical_line_to_cursor.width();
            total_width.saturating_sub(width_of_prev_segments) as u16
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);
        let col = (area.x + cursor_col).min(area.x + width - 1);
        let row = (area.y + visible_line).min(area.y + area.height.saturating_sub(1));
        (col, row)
    }
}
