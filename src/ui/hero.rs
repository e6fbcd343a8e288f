//! Hero section: logo, tagline, call to action, and the bubble overlay.
//!
//! The hero draws into the page buffer like every section; the bubbles are an
//! overlay drawn after the visible page rows are on screen, because they
//! float over the hero's right margin and carry their own hit areas.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use super::helpers::{centered_x, draw_box, render_text_at, text_width};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{
    COLOR_ACCENT, COLOR_BUBBLE, COLOR_DIM, COLOR_HOVER, COLOR_PULSE, COLOR_TEXT, COLOR_TITLE,
};
use crate::page::{SectionKind, HERO_CTA, HERO_TAGLINE, HERO_TITLE};
use crate::widgets::faq::wrap_words;
use crate::widgets::BubblesWidget;

// ============================================================================
// Etalage ASCII Logo
// ============================================================================

pub const ETALAGE_LOGO: &[&str] = &[
    "███████╗████████╗ █████╗ ██╗      █████╗  ██████╗ ███████╗",
    "██╔════╝╚══██╔══╝██╔══██╗██║     ██╔══██╗██╔════╝ ██╔════╝",
    "█████╗     ██║   ███████║██║     ███████║██║  ███╗█████╗  ",
    "██╔══╝     ██║   ██╔══██║██║     ██╔══██║██║   ██║██╔══╝  ",
    "███████╗   ██║   ██║  ██║███████╗██║  ██║╚██████╔╝███████╗",
    "╚══════╝   ╚═╝   ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝ ╚═════╝ ╚══════╝",
];

/// Bubble pills are one bordered row of text.
const BUBBLE_HEIGHT: u16 = 3;

// ============================================================================
// Layout
// ============================================================================

/// The hero's inner content column. Bubbles anchor to this rect and overhang
/// its right edge into the page margin.
pub fn container(area: Rect) -> Rect {
    let margin = (area.width / 8).clamp(2, 12);
    Rect {
        x: area.x + margin,
        y: area.y,
        width: area.width.saturating_sub(margin * 2),
        height: area.height,
    }
}

// ============================================================================
// Section Rendering
// ============================================================================

/// Render the hero section into the page buffer and register its hit areas
/// (page coordinates).
pub fn render_hero(buf: &mut Buffer, area: Rect, registry: &mut HitAreaRegistry) {
    if area.height < 8 || area.width < 20 {
        return;
    }
    let container = container(area);
    let logo_width = ETALAGE_LOGO[0].chars().count() as u16;
    let logo_fits = container.width >= logo_width && area.height >= 18;

    let mut y = area.y + 2;
    if logo_fits {
        let x = centered_x(container, logo_width);
        for line in ETALAGE_LOGO {
            render_text_at(buf, x, y, line, Style::default().fg(COLOR_ACCENT), area);
            y += 1;
        }
        y += 1;
    } else {
        for line in wrap_words(HERO_TITLE, container.width) {
            let style = Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD);
            render_text_at(buf, centered_x(container, text_width(&line)), y, &line, style, area);
            y += 1;
        }
        y += 1;
    }

    for line in wrap_words(HERO_TAGLINE, container.width) {
        render_text_at(
            buf,
            centered_x(container, text_width(&line)),
            y,
            &line,
            Style::default().fg(COLOR_TEXT),
            area,
        );
        y += 1;
    }
    y += 1;

    // Call to action button, scrolls the page down to the signup form.
    let button_width = (text_width(HERO_CTA) + 4).min(container.width);
    let button = Rect {
        x: centered_x(container, button_width),
        y: y.min(area.y + area.height.saturating_sub(3)),
        width: button_width,
        height: 3,
    };
    draw_box(buf, button, Style::default().fg(COLOR_ACCENT));
    render_text_at(
        buf,
        button.x + 2,
        button.y + 1,
        HERO_CTA,
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        area,
    );
    registry.register(
        button,
        ClickAction::JumpTo(SectionKind::Newsletter),
        Some(Style::default().fg(COLOR_HOVER)),
    );
}

// ============================================================================
// Bubble Overlay
// ============================================================================

/// Draw the floating bubbles over the on-screen hero and register their hit
/// areas (screen coordinates).
///
/// `container` is the hero's content column in page coordinates; `y_shift`
/// maps a page row to its screen row. Bubbles whose rows are not fully inside
/// `content` are skipped for this frame.
pub fn render_bubbles(
    buf: &mut Buffer,
    container: Rect,
    y_shift: i32,
    content: Rect,
    bubbles: &BubblesWidget,
    now_ms: u64,
    registry: &mut HitAreaRegistry,
) {
    for (index, bubble) in bubbles.bubbles.iter().enumerate() {
        let width = text_width(bubble.label) + 4;
        if width > content.width {
            continue;
        }

        let max_x = i32::from(content.x + content.width - width);
        let x = (i32::from(container.x) + bubble.x)
            .clamp(i32::from(content.x), max_x);
        let y = i32::from(container.y) + bubble.y + y_shift + bubbles.bob_offset(index);
        if y < i32::from(content.y)
            || y + i32::from(BUBBLE_HEIGHT) > i32::from(content.y + content.height)
        {
            continue;
        }

        let pill = Rect {
            x: x as u16,
            y: y as u16,
            width,
            height: BUBBLE_HEIGHT,
        };
        let pressed = bubbles.pressed(index, now_ms);
        let border = if pressed { COLOR_PULSE } else { COLOR_BUBBLE };

        // Clear the pill's interior so the hero text does not bleed through.
        for py in pill.y..pill.y + pill.height {
            for px in pill.x..pill.x + pill.width {
                buf[(px, py)].set_char(' ').set_style(Style::default());
            }
        }
        draw_box(buf, pill, Style::default().fg(border));
        let label_style = if pressed {
            Style::default().fg(Color::Black).bg(COLOR_BUBBLE)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        render_text_at(buf, pill.x + 2, pill.y + 1, bubble.label, label_style, content);

        if let Some(progress) = bubbles.pulse_progress(index, now_ms) {
            render_pulse_ring(buf, pill, progress, content);
        }

        registry.register(
            pill,
            ClickAction::PressBubble(index),
            Some(Style::default().fg(COLOR_PULSE)),
        );
    }
}

/// Expanding dotted ring around a clicked bubble, fading over its lifetime.
fn render_pulse_ring(buf: &mut Buffer, pill: Rect, progress: f32, content: Rect) {
    let radius = 1 + (progress * 2.0) as u16;
    let ring = Rect {
        x: pill.x.saturating_sub(radius),
        y: pill.y.saturating_sub(radius),
        width: pill.width + radius * 2,
        height: pill.height + radius * 2,
    };
    let mut style = Style::default().fg(COLOR_PULSE);
    if progress >= 0.5 {
        style = style.add_modifier(Modifier::DIM);
    }

    let x2 = ring.x + ring.width.saturating_sub(1);
    let y2 = ring.y + ring.height.saturating_sub(1);
    let mut dot = |x: u16, y: u16| {
        if x >= content.x
            && x < content.x + content.width
            && y >= content.y
            && y < content.y + content.height
        {
            buf[(x, y)].set_char('\u{00B7}').set_style(style);
        }
    };

    let mut x = ring.x;
    while x <= x2 {
        dot(x, ring.y);
        dot(x, y2);
        x += 2;
    }
    for y in ring.y..=y2 {
        dot(ring.x, y);
        dot(x2, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::BUBBLE_LABELS;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_logo_dimensions() {
        assert_eq!(ETALAGE_LOGO.len(), 6);
        let first_width = ETALAGE_LOGO[0].chars().count();
        for line in ETALAGE_LOGO.iter() {
            assert_eq!(line.chars().count(), first_width);
        }
    }

    #[test]
    fn test_container_keeps_margins() {
        let area = Rect::new(0, 0, 80, 21);
        let inner = container(area);
        assert_eq!(inner.x, 10);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 21);
    }

    #[test]
    fn test_render_wide_uses_logo_and_registers_cta() {
        let area = Rect::new(0, 0, 100, 21);
        let mut buf = Buffer::empty(area);
        let mut registry = HitAreaRegistry::new();
        render_hero(&mut buf, area, &mut registry);

        // Logo block characters show up on the first logo row.
        assert!(row_text(&buf, 2).contains('\u{2588}'));
        // Full-width title is not used in logo mode.
        assert!(!row_text(&buf, 2).contains("Jouw winkel"));
        assert_eq!(registry.len(), 1);

        // The CTA click jumps to the newsletter form.
        let tagline_present = (0..21).any(|y| row_text(&buf, y).contains("runt de zaak"));
        assert!(tagline_present);
    }

    #[test]
    fn test_render_narrow_falls_back_to_text_title() {
        let area = Rect::new(0, 0, 50, 21);
        let mut buf = Buffer::empty(area);
        let mut registry = HitAreaRegistry::new();
        render_hero(&mut buf, area, &mut registry);

        let has_title = (0..21).any(|y| row_text(&buf, y).contains("Jouw winkel"));
        assert!(has_title);
        assert!(!row_text(&buf, 2).contains('\u{2588}'));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_bubbles_render_and_register() {
        let area = Rect::new(0, 0, 100, 24);
        let content = area;
        let hero_container = container(Rect::new(0, 0, 100, 21));
        let bubbles = BubblesWidget::mount(&BUBBLE_LABELS, hero_container).unwrap();

        let mut buf = Buffer::empty(area);
        let mut registry = HitAreaRegistry::new();
        render_bubbles(&mut buf, hero_container, 0, content, &bubbles, 0, &mut registry);

        assert_eq!(registry.len(), 3);
        let found = (0..24).any(|y| row_text(&buf, y).contains("Snel live"));
        assert!(found, "bubble label not rendered");
    }

    #[test]
    fn test_bubbles_scrolled_off_are_skipped() {
        let area = Rect::new(0, 0, 100, 24);
        let hero_container = container(Rect::new(0, 0, 100, 21));
        let bubbles = BubblesWidget::mount(&BUBBLE_LABELS, hero_container).unwrap();

        let mut buf = Buffer::empty(area);
        let mut registry = HitAreaRegistry::new();
        // Shift the hero far above the viewport.
        render_bubbles(&mut buf, hero_container, -40, area, &bubbles, 0, &mut registry);

        assert!(registry.is_empty());
    }
}
