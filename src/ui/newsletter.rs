//! Newsletter signup section: two fields and a submit button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::helpers::{draw_box, render_text_at, text_width};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HOVER, COLOR_TITLE};
use crate::page::{NEWSLETTER_PROMPT, NEWSLETTER_SUBMIT, NEWSLETTER_TITLE};
use crate::widgets::{FormField, InputField, NewsletterWidget};

/// Labels padded to a common width so the field boxes line up.
const LABEL_NAAM: &str = "Naam  ";
const LABEL_EMAIL: &str = "E-mail";

/// Render the newsletter section into the page buffer and register its hit
/// areas (page coordinates). `focus` draws the cursor in one of the fields.
pub fn render_newsletter(
    buf: &mut Buffer,
    area: Rect,
    form: Option<&NewsletterWidget>,
    focus: Option<FormField>,
    registry: &mut HitAreaRegistry,
) {
    if area.width < 24 || area.height < 10 {
        return;
    }

    render_text_at(
        buf,
        area.x + 1,
        area.y,
        NEWSLETTER_TITLE,
        Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        area,
    );
    render_text_at(
        buf,
        area.x + 1,
        area.y + 1,
        NEWSLETTER_PROMPT,
        Style::default().fg(COLOR_DIM),
        area,
    );

    let field_width = area.width.saturating_sub(4).min(46);
    let naam_row = Rect {
        x: area.x + 2,
        y: area.y + 3,
        width: field_width,
        height: 1,
    };
    let email_row = Rect {
        x: area.x + 2,
        y: area.y + 5,
        width: field_width,
        height: 1,
    };

    match form {
        Some(widget) => {
            widget
                .naam
                .render_flat(naam_row, buf, LABEL_NAAM, focus == Some(FormField::Naam));
            widget
                .email
                .render_flat(email_row, buf, LABEL_EMAIL, focus == Some(FormField::Email));
            registry.register(naam_row, ClickAction::FocusField(FormField::Naam), None);
            registry.register(email_row, ClickAction::FocusField(FormField::Email), None);
        }
        None => {
            InputField::new().render_flat(naam_row, buf, LABEL_NAAM, false);
            InputField::new().render_flat(email_row, buf, LABEL_EMAIL, false);
        }
    }

    let in_flight = form.is_some_and(|w| w.in_flight);
    let label = if in_flight {
        "Aanmelden\u{2026}"
    } else {
        NEWSLETTER_SUBMIT
    };
    let button = Rect {
        x: area.x + 2,
        y: area.y + 7,
        width: (text_width(label) + 4).min(area.width.saturating_sub(4)),
        height: 3,
    };
    let button_style = if in_flight {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    draw_box(buf, button, button_style);
    render_text_at(buf, button.x + 2, button.y + 1, label, button_style, area);
    if form.is_some() {
        registry.register(
            button,
            ClickAction::SubmitNewsletter,
            Some(Style::default().fg(COLOR_HOVER)),
        );
    }
}
