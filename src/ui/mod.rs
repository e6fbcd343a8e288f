//! UI rendering for the Etalage page
//!
//! Draws the one-page site top to bottom in a scrolling terminal viewport:
//! - Hero with logo, tagline, call-to-action, and floating bubbles
//! - Traffic chart with an entrance animation and hover tooltips
//! - FAQ with category tabs, live search, and an accordion list
//! - Newsletter signup form with a confirmation dialog
//! - Footer and a one-row status bar
//!
//! ## Page Buffer Pipeline
//!
//! Sections do not render straight to the screen. Each frame builds a buffer
//! as tall as the whole page, the sections draw into it at their laid-out
//! rows, and the rows under the scroll offset are copied into the frame. Hit
//! areas are registered in page coordinates during the section pass and
//! shifted into screen coordinates by [`HitAreaRegistry::apply_scroll`] right
//! after the copy. Overlays (bubbles, the confirmation dialog, the tooltip)
//! skip the page buffer and draw straight onto the frame in screen
//! coordinates.

pub mod chart;
pub mod faq;
mod helpers;
pub mod hero;
pub mod interaction;
pub mod modal;
mod newsletter;
pub mod theme;
pub mod tooltip;

// Colors the section renderers share.
pub use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR};

use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};

use crate::app::{App, Focus};
use crate::page::{self, SectionKind};
use helpers::{centered_x, render_text_at, text_width};
use interaction::HitAreaRegistry;

// ============================================================================
// Status Bar Text
// ============================================================================

const STATUS_HINTS: &str = "\u{2191}/\u{2193} scrollen \u{b7} Tab veld \u{b7} Enter versturen \u{b7} q afsluiten";
const MODAL_HINTS: &str = "Enter of Esc sluiten";
const SENDING_LABEL: &str = "Versturen\u{2026}";

// ============================================================================
// Frame Rendering
// ============================================================================

/// Render one frame of the page.
pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    if frame_area.width == 0 || frame_area.height == 0 {
        return;
    }

    let now = app.now_ms();
    let content = Rect::new(
        frame_area.x,
        frame_area.y,
        frame_area.width,
        frame_area.height - 1,
    );
    let status_row = Rect::new(
        frame_area.x,
        frame_area.y + content.height,
        frame_area.width,
        1,
    );

    // Build the full page off-screen. Sections register their hit areas in
    // page coordinates while they draw.
    let page_area = Rect::new(0, 0, content.width, app.page_height());
    let mut page_buf = Buffer::empty(page_area);

    app.hit_registry.clear();
    let search_focused = app.focus == Focus::FaqSearch;
    let form_focus = match app.focus {
        Focus::Form(field) => Some(field),
        _ => None,
    };

    for placed in &app.layout {
        match placed.kind {
            SectionKind::Hero => {
                hero::render_hero(&mut page_buf, placed.rect, &mut app.hit_registry);
            }
            SectionKind::Chart => chart::render_chart(
                &mut page_buf,
                placed.rect,
                &page::SITE_TRAFFIC,
                app.chart.as_ref(),
                now,
                &mut app.hit_registry,
            ),
            SectionKind::Faq => faq::render_faq(
                &mut page_buf,
                placed.rect,
                &page::FAQ_CATALOG,
                app.faq.as_ref(),
                search_focused,
                &mut app.hit_registry,
            ),
            SectionKind::Newsletter => newsletter::render_newsletter(
                &mut page_buf,
                placed.rect,
                app.newsletter.as_ref(),
                form_focus,
                &mut app.hit_registry,
            ),
            SectionKind::Footer => render_footer(&mut page_buf, placed.rect),
        }
    }

    // Copy the visible page rows into the frame.
    let scroll = app.scroll;
    let buf = frame.buffer_mut();
    for row in 0..content.height {
        let page_y = scroll + row;
        if page_y >= page_area.height {
            break;
        }
        for x in 0..content.width {
            buf[(content.x + x, content.y + row)] = page_buf[(x, page_y)].clone();
        }
    }

    // Hit areas follow the same window: shift into screen coordinates, clip
    // to the content rows, drop what scrolled out.
    app.hit_registry.apply_scroll(scroll, content);

    // Bubbles float over the hero in screen coordinates, so their bob motion
    // never disturbs the page layout.
    let hero_rect = app.section_rect(SectionKind::Hero);
    if let (Some(bubbles), Some(hero)) = (app.bubbles.as_ref(), hero_rect) {
        let y_shift = i32::from(content.y) - i32::from(scroll);
        hero::render_bubbles(
            buf,
            hero::container(hero),
            y_shift,
            content,
            bubbles,
            now,
            &mut app.hit_registry,
        );
    }

    let modal_open = app.modal_open();
    if modal_open {
        modal::render_modal(buf, content, &mut app.hit_registry);
    }

    let (status, in_flight) = match app.newsletter.as_ref() {
        Some(form) => (form.status.clone(), form.in_flight),
        None => (None, false),
    };
    render_status_bar(
        buf,
        status_row,
        status.as_deref(),
        in_flight,
        modal_open,
        scroll,
        app.max_scroll(),
    );

    // The frame's areas are new, so the hover state must be re-derived from
    // the last known cursor position before it can style anything.
    if let Some((mouse_x, mouse_y)) = app.mouse {
        app.hit_registry.update_hover(mouse_x, mouse_y);
    }
    apply_hover_highlight(buf, &app.hit_registry);

    if !modal_open {
        if let Some((lines, anchor_x, anchor_y)) = app.hit_registry.tooltip_info() {
            tooltip::render_tooltip(buf, lines, anchor_x, anchor_y);
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

/// Render the footer lines, centered and dim, into the page buffer.
fn render_footer(buf: &mut Buffer, area: Rect) {
    let style = Style::default().fg(theme::COLOR_DIM);
    for (row, line) in page::FOOTER_LINES.iter().enumerate() {
        let y = area.y + 1 + row as u16;
        if y >= area.y + area.height {
            break;
        }
        render_text_at(buf, centered_x(area, text_width(line)), y, line, style, area);
    }
}

// ============================================================================
// Status Bar
// ============================================================================

/// Render the one-row status bar at the bottom of the frame.
///
/// A form error beats the in-flight notice, which beats the key hints. The
/// right edge carries the scroll position as a percentage.
fn render_status_bar(
    buf: &mut Buffer,
    area: Rect,
    status: Option<&str>,
    in_flight: bool,
    modal_open: bool,
    scroll: u16,
    max_scroll: u16,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (text, style) = if let Some(message) = status {
        (message, Style::default().fg(COLOR_ERROR))
    } else if in_flight {
        (SENDING_LABEL, Style::default().fg(COLOR_ACCENT))
    } else if modal_open {
        (MODAL_HINTS, Style::default().fg(COLOR_DIM))
    } else {
        (STATUS_HINTS, Style::default().fg(COLOR_DIM))
    };
    render_text_at(buf, area.x + 1, area.y, text, style, area);

    let percent = if max_scroll == 0 {
        100
    } else {
        u32::from(scroll) * 100 / u32::from(max_scroll)
    };
    let indicator = format!("{percent}%");
    let indicator_width = text_width(&indicator);
    if area.width > text_width(text) + indicator_width + 4 {
        let x = area.x + area.width - indicator_width - 1;
        render_text_at(
            buf,
            x,
            area.y,
            &indicator,
            Style::default().fg(COLOR_DIM),
            area,
        );
    }
}

// ============================================================================
// Hover Highlight
// ============================================================================

/// Patch the hovered area's style over its cells.
///
/// Runs after every overlay so the highlight lands on whatever is actually
/// on top. The style is merged into each cell, so a foreground-only hover
/// style keeps the cell's background.
fn apply_hover_highlight(buf: &mut Buffer, registry: &HitAreaRegistry) {
    let Some(area) = registry.hovered() else {
        return;
    };
    let Some(style) = area.hover_style else {
        return;
    };

    let rect = area.rect.intersection(buf.area);
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            buf[(x, y)].set_style(style);
        }
    }
}
