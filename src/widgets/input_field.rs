use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_INPUT_BG, COLOR_TEXT};

/// A single-line text field with cursor handling and horizontal scrolling.
///
/// Cursor positions are character indices; edits stay correct for multibyte
/// input (names with diacritics are common on this page).
#[derive(Debug, Clone, Default)]
pub struct InputField {
    content: String,
    /// Cursor position as a character index
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor (Delete).
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Render as a flat one-row field: `label` on the left, the value in a
    /// shaded box, a block cursor when focused.
    pub fn render_flat(&self, area: Rect, buf: &mut Buffer, label: &str, focused: bool) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let label_span = Span::styled(label, Style::default().fg(COLOR_DIM));
        buf.set_span(area.x, area.y, &label_span, area.width);

        let label_width = label.width() as u16;
        if area.width <= label_width + 1 {
            return;
        }
        let field_x = area.x + label_width + 1;
        let field_width = (area.width - label_width - 1) as usize;

        // Shift the window so the cursor stays visible.
        let mut scroll = 0usize;
        if self.cursor >= field_width {
            scroll = self.cursor - field_width + 1;
        }

        let field_bg = Style::default().fg(COLOR_TEXT).bg(COLOR_INPUT_BG);
        for i in 0..field_width {
            buf.set_string(field_x + i as u16, area.y, " ", field_bg);
        }

        let visible: String = self
            .content
            .chars()
            .skip(scroll)
            .take(field_width)
            .collect();
        buf.set_string(field_x, area.y, &visible, field_bg);

        if focused {
            let cursor_x = (self.cursor - scroll) as u16;
            if cursor_x < field_width as u16 {
                let under = self.content.chars().nth(self.cursor).unwrap_or(' ');
                let cursor_style = Style::default().fg(COLOR_INPUT_BG).bg(COLOR_ACCENT);
                buf.set_string(
                    field_x + cursor_x,
                    area.y,
                    under.to_string(),
                    cursor_style,
                );
            }
        }
    }
}
