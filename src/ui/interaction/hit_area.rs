//! Clickable regions and hover tracking.
//!
//! Section renderers push a [`HitArea`] for everything interactive while they
//! draw. Because sections draw into a page-tall buffer, the rects start out in
//! page coordinates; [`HitAreaRegistry::apply_scroll`] moves them into screen
//! coordinates once the visible rows are known. Overlays (bubbles, the modal)
//! register afterwards, directly in screen coordinates, and win hit tests by
//! registration order.

use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

use crate::page::{FaqCategory, SectionKind};
use crate::widgets::FormField;

/// What a click on a region does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    // Hero
    /// Scroll the page so the given section tops the viewport
    JumpTo(SectionKind),
    /// Press a floating bubble (squeeze + pulse feedback)
    PressBubble(usize),

    // Chart
    /// A data point marker; hover shows its tooltip
    ChartPoint(usize),

    // FAQ
    /// Switch the active category tab
    SelectFaqTab(FaqCategory),
    /// Expand or collapse a question
    ToggleFaqItem(usize),
    /// Give the search field keyboard focus
    FocusFaqSearch,

    // Newsletter form
    /// Give a form field keyboard focus
    FocusField(FormField),
    /// Submit the signup form
    SubmitNewsletter,
    /// Close button inside the confirmation dialog
    CloseModal,
}

/// One interactive region, as registered by a renderer.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Merged over the region's cells while the cursor rests on it.
    pub hover_style: Option<Style>,
    /// Lines shown in a floating tooltip while the cursor rests on it.
    pub tooltip: Option<Vec<String>>,
}

/// Per-frame collection of hit areas.
///
/// Rebuilt on every draw: `clear` at the top of the frame, `register` during
/// section rendering, `apply_scroll` when blitting, then hit tests and hover
/// updates run against the finished set.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<usize>,
    /// Tooltip lines of the hovered area plus the cursor cell they anchor to.
    tooltip: Option<(Vec<String>, u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas and hover state. Runs at the start of every frame.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
        self.tooltip = None;
    }

    /// Add a region. Later registrations sit on top of earlier ones.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
            tooltip: None,
        });
    }

    /// Add a region whose hover shows a tooltip instead of a restyle.
    pub fn register_with_tooltip(&mut self, rect: Rect, action: ClickAction, lines: Vec<String>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style: None,
            tooltip: Some(lines),
        });
    }

    /// The action under the given cell, topmost area first.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.index_at(x, y).map(|i| self.areas[i].action)
    }

    /// Move the hover to the given cell. Returns whether anything visible
    /// changed. Tooltips anchor to the cursor, so motion inside a
    /// tooltip-bearing area counts as a change too.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let index = self.index_at(x, y);
        let tooltip = index
            .and_then(|i| self.areas[i].tooltip.clone())
            .map(|lines| (lines, x, y));

        let changed = index != self.hovered || tooltip != self.tooltip;
        self.hovered = index;
        self.tooltip = tooltip;
        changed
    }

    /// Topmost area containing the cell.
    fn index_at(&self, x: u16, y: u16) -> Option<usize> {
        let position = Position::new(x, y);
        self.areas.iter().rposition(|area| area.rect.contains(position))
    }

    /// The area the cursor is resting on.
    pub fn hovered(&self) -> Option<&HitArea> {
        self.hovered.map(|i| &self.areas[i])
    }

    /// Tooltip lines of the hovered area and their cursor anchor.
    pub fn tooltip_info(&self) -> Option<(&[String], u16, u16)> {
        self.tooltip
            .as_ref()
            .map(|(lines, x, y)| (lines.as_slice(), *x, *y))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Translate page-coordinate areas into screen coordinates.
    ///
    /// Sections render into a page-tall buffer and register areas in page
    /// coordinates; after the visible rows are copied to the screen, this
    /// shifts every area up by `scroll` rows into `content`, clipping areas
    /// that cross the content edges and dropping the ones that fall outside.
    pub fn apply_scroll(&mut self, scroll: u16, content: Rect) {
        let shift = i32::from(content.y) - i32::from(scroll);
        let top = i32::from(content.y);
        let bottom = i32::from(content.y) + i32::from(content.height);

        self.areas.retain_mut(|area| {
            let area_top = (i32::from(area.rect.y) + shift).max(top);
            let area_bottom = (i32::from(area.rect.y) + i32::from(area.rect.height) + shift)
                .min(bottom);
            if area_bottom <= area_top {
                return false;
            }
            area.rect.y = area_top as u16;
            area.rect.height = (area_bottom - area_top) as u16;
            true
        });
    }
}
