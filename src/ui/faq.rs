//! FAQ section: category tabs, search box, and the accordion list.
//!
//! The section's height is content-driven, so layout asks `section_rows`
//! before placing it. Without a mounted widget the section shows the default
//! category collapsed and registers no hit areas.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::helpers::{render_text_at, text_width};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HOVER, COLOR_TEXT, COLOR_TITLE};
use crate::page::{FaqCategory, FaqEntry, FAQ_EMPTY_MESSAGE, FAQ_HEADER_ROWS, FAQ_TITLE};
use crate::widgets::faq::{answer_width, wrap_words, FaqWidget};
use crate::widgets::InputField;

/// Blank rows under the item list before the next section.
const FOOTER_PAD_ROWS: u16 = 2;

/// Total rows the FAQ section needs at `width` columns. Tracks expansion and
/// filtering; an inactive widget counts the default category collapsed.
pub fn section_rows(faq: Option<&FaqWidget>, catalog: &[FaqEntry], width: u16) -> u16 {
    let list = match faq {
        Some(widget) => widget.list_rows(catalog, width).max(1),
        None => FaqWidget::count_for(FaqCategory::Algemeen, catalog) as u16,
    };
    FAQ_HEADER_ROWS + list + FOOTER_PAD_ROWS
}

/// Render the FAQ section into the page buffer and register its hit areas
/// (page coordinates). `search_focused` draws the cursor in the search box.
pub fn render_faq(
    buf: &mut Buffer,
    area: Rect,
    catalog: &[FaqEntry],
    faq: Option<&FaqWidget>,
    search_focused: bool,
    registry: &mut HitAreaRegistry,
) {
    if area.width < 20 || area.height < FAQ_HEADER_ROWS {
        return;
    }

    render_text_at(
        buf,
        area.x + 1,
        area.y,
        FAQ_TITLE,
        Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        area,
    );

    render_tabs(buf, area, catalog, faq, registry);
    render_search(buf, area, faq, search_focused, registry);
    render_items(buf, area, catalog, faq, registry);
}

/// Category tabs with item counts on the second row.
fn render_tabs(
    buf: &mut Buffer,
    area: Rect,
    catalog: &[FaqEntry],
    faq: Option<&FaqWidget>,
    registry: &mut HitAreaRegistry,
) {
    let active = faq.map(|w| w.active_category).unwrap_or(FaqCategory::Algemeen);
    let searching = faq.is_some_and(|w| w.searching());
    let mut x = area.x + 1;
    let y = area.y + 2;

    for category in FaqCategory::ALL {
        let text = format!(
            "{} ({})",
            category.label(),
            FaqWidget::count_for(category, catalog)
        );
        let width = text_width(&text);
        // While a search crosses categories no tab reads as active.
        let style = if category == active && !searching {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        render_text_at(buf, x, y, &text, style, area);

        if faq.is_some() {
            registry.register(
                Rect {
                    x,
                    y,
                    width,
                    height: 1,
                },
                ClickAction::SelectFaqTab(category),
                Some(Style::default().fg(COLOR_HOVER)),
            );
        }
        x += width + 3;
    }
}

/// The search box on the fourth row.
fn render_search(
    buf: &mut Buffer,
    area: Rect,
    faq: Option<&FaqWidget>,
    search_focused: bool,
    registry: &mut HitAreaRegistry,
) {
    let row = Rect {
        x: area.x + 1,
        y: area.y + 4,
        width: area.width.saturating_sub(2).min(40),
        height: 1,
    };
    match faq {
        Some(widget) => {
            widget.search.render_flat(row, buf, "Zoeken", search_focused);
            registry.register(row, ClickAction::FocusFaqSearch, None);
        }
        None => {
            InputField::new().render_flat(row, buf, "Zoeken", false);
        }
    }
}

/// Accordion items below the header rows.
fn render_items(
    buf: &mut Buffer,
    area: Rect,
    catalog: &[FaqEntry],
    faq: Option<&FaqWidget>,
    registry: &mut HitAreaRegistry,
) {
    let visible: Vec<usize> = match faq {
        Some(widget) => widget.visible_indices(catalog),
        None => catalog
            .iter()
            .enumerate()
            .filter(|(_, e)| e.category == FaqCategory::Algemeen)
            .map(|(i, _)| i)
            .collect(),
    };
    let mut y = area.y + FAQ_HEADER_ROWS;
    let bottom = area.y + area.height;

    if visible.is_empty() {
        render_text_at(
            buf,
            area.x + 2,
            y,
            FAQ_EMPTY_MESSAGE,
            Style::default().fg(COLOR_DIM),
            area,
        );
        return;
    }

    for index in visible {
        if y >= bottom {
            break;
        }
        let entry = &catalog[index];
        let indicator = faq.map(|w| w.indicator(index)).unwrap_or('+');
        let line = format!("{indicator} {}", entry.question);
        render_text_at(buf, area.x + 2, y, &line, Style::default().fg(COLOR_TEXT), area);

        if faq.is_some() {
            registry.register(
                Rect {
                    x: area.x + 1,
                    y,
                    width: area.width.saturating_sub(2),
                    height: 1,
                },
                ClickAction::ToggleFaqItem(index),
                Some(Style::default().fg(COLOR_HOVER)),
            );
        }
        y += 1;

        if faq.is_some_and(|w| w.is_expanded(index)) {
            for answer_line in wrap_words(entry.answer, answer_width(area.width)) {
                if y >= bottom {
                    break;
                }
                render_text_at(
                    buf,
                    area.x + 4,
                    y,
                    &answer_line,
                    Style::default().fg(COLOR_DIM),
                    area,
                );
                y += 1;
            }
        }
    }
}
