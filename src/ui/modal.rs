//! Confirmation overlay after a successful newsletter signup.
//!
//! The dialog floats over the page in screen coordinates. Click handling
//! outside the dialog is geometric: the app asks [`dialog_rect`] whether a
//! click landed outside and closes the overlay if so, which keeps the page
//! itself inert while the overlay is open without a backdrop hit area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::helpers::{centered_x, draw_box, render_text_at, text_width};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_DIALOG_BG, COLOR_HOVER, COLOR_SUCCESS, COLOR_TEXT, COLOR_TITLE};
use crate::page::{MODAL_BODY, MODAL_CLOSE, MODAL_TITLE};
use crate::widgets::faq::wrap_words;

const MAX_DIALOG_WIDTH: u16 = 50;

/// Where the dialog sits on the given screen. Pure in the screen rect, so the
/// click handler can re-derive it outside the render pass.
pub fn dialog_rect(screen: Rect) -> Rect {
    let width = screen.width.saturating_sub(8).min(MAX_DIALOG_WIDTH).max(20);
    let body_lines = wrap_words(MODAL_BODY, width.saturating_sub(4)).len() as u16;
    let height = (body_lines + 6).min(screen.height);
    Rect {
        x: screen.x + (screen.width.saturating_sub(width)) / 2,
        y: screen.y + (screen.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Draw the dialog over the frame and register the close button.
pub fn render_modal(buf: &mut Buffer, screen: Rect, registry: &mut HitAreaRegistry) {
    let dialog = dialog_rect(screen);
    if dialog.width < 20 || dialog.height < 6 {
        return;
    }

    let bg = Style::default().bg(COLOR_DIALOG_BG);
    for y in dialog.y..dialog.y + dialog.height {
        for x in dialog.x..dialog.x + dialog.width {
            buf[(x, y)].set_char(' ').set_style(bg);
        }
    }
    draw_box(buf, dialog, Style::default().fg(COLOR_SUCCESS).bg(COLOR_DIALOG_BG));

    render_text_at(
        buf,
        centered_x(dialog, text_width(MODAL_TITLE)),
        dialog.y + 1,
        MODAL_TITLE,
        Style::default()
            .fg(COLOR_SUCCESS)
            .bg(COLOR_DIALOG_BG)
            .add_modifier(Modifier::BOLD),
        dialog,
    );

    let mut y = dialog.y + 3;
    for line in wrap_words(MODAL_BODY, dialog.width.saturating_sub(4)) {
        render_text_at(
            buf,
            dialog.x + 2,
            y,
            &line,
            Style::default().fg(COLOR_TEXT).bg(COLOR_DIALOG_BG),
            dialog,
        );
        y += 1;
    }

    let close_label = format!("[ {MODAL_CLOSE} ]");
    let close = Rect {
        x: centered_x(dialog, text_width(&close_label)),
        y: dialog.y + dialog.height - 2,
        width: text_width(&close_label),
        height: 1,
    };
    render_text_at(
        buf,
        close.x,
        close.y,
        &close_label,
        Style::default().fg(COLOR_TITLE).bg(COLOR_DIALOG_BG),
        dialog,
    );
    registry.register(
        close,
        ClickAction::CloseModal,
        Some(Style::default().fg(COLOR_HOVER).bg(COLOR_DIALOG_BG)),
    );
}
