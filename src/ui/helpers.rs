//! Helper functions for UI rendering
//!
//! Shared text placement, centering, and box-drawing used by the section
//! renderers.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

/// `area` shrunk by `margin` on every side.
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Write text starting at a position, clipped to `area`.
pub fn render_text_at(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, area: Rect) {
    if y < area.y || y >= area.y + area.height {
        return;
    }
    for (offset, ch) in text.chars().enumerate() {
        let pos_x = x + offset as u16;
        if pos_x >= area.x && pos_x < area.x + area.width {
            buf[(pos_x, y)].set_char(ch).set_style(style);
        }
    }
}

/// The x position that centers `text_width` columns inside `area`.
pub fn centered_x(area: Rect, text_width: u16) -> u16 {
    area.x + (area.width.saturating_sub(text_width)) / 2
}

/// Display width of a string in terminal columns.
pub fn text_width(text: &str) -> u16 {
    text.width() as u16
}

/// Draw a box outline with rounded corners, clipped to the buffer.
pub fn draw_box(buf: &mut Buffer, rect: Rect, style: Style) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let screen = buf.area;
    let x2 = rect.x + rect.width - 1;
    let y2 = rect.y + rect.height - 1;

    let mut put = |x: u16, y: u16, ch: char| {
        if x >= screen.x
            && x < screen.x + screen.width
            && y >= screen.y
            && y < screen.y + screen.height
        {
            buf[(x, y)].set_char(ch).set_style(style);
        }
    };

    put(rect.x, rect.y, '\u{256D}');
    put(x2, rect.y, '\u{256E}');
    put(rect.x, y2, '\u{2570}');
    put(x2, y2, '\u{256F}');
    for x in (rect.x + 1)..x2 {
        put(x, rect.y, '\u{2500}');
        put(x, y2, '\u{2500}');
    }
    for y in (rect.y + 1)..y2 {
        put(rect.x, y, '\u{2502}');
        put(x2, y, '\u{2502}');
    }
}
