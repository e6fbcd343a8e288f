//! Click dispatch: a hit area's action applied to the app.

use super::hit_area::ClickAction;
use crate::app::{App, Focus};

/// Apply the action a clicked hit area carries.
///
/// Called from the mouse handler when a click lands on a registered hit
/// area. Every action changes something visible, so the dirty flag is set up
/// front.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::JumpTo(section) => {
            app.jump_to(section);
            tracing::debug!(?section, "Click: JumpTo - scrolled section into view");
        }
        ClickAction::PressBubble(index) => {
            let now = app.now_ms();
            if let Some(bubbles) = app.bubbles.as_mut() {
                bubbles.click(index, now);
            }
            tracing::debug!(index, "Click: PressBubble - press and pulse started");
        }
        ClickAction::ChartPoint(index) => {
            // The tooltip already follows hover; a click changes nothing.
            tracing::debug!(index, "Click: ChartPoint - no state change");
        }
        ClickAction::SelectFaqTab(category) => {
            if let Some(faq) = app.faq.as_mut() {
                faq.set_category(category);
            }
            app.reflow(app.page_width);
            app.check_visibility();
            tracing::debug!(?category, "Click: SelectFaqTab - category switched");
        }
        ClickAction::ToggleFaqItem(index) => {
            if let Some(faq) = app.faq.as_mut() {
                faq.toggle(index);
            }
            // Opening an answer moves every section below the FAQ.
            app.reflow(app.page_width);
            app.check_visibility();
            tracing::debug!(index, "Click: ToggleFaqItem - accordion toggled");
        }
        ClickAction::FocusFaqSearch => {
            app.focus = Focus::FaqSearch;
            tracing::debug!("Click: FocusFaqSearch - search focused");
        }
        ClickAction::FocusField(field) => {
            app.focus = Focus::Form(field);
            tracing::debug!(?field, "Click: FocusField - form field focused");
        }
        ClickAction::SubmitNewsletter => {
            app.submit_newsletter();
            tracing::debug!("Click: SubmitNewsletter - submit requested");
        }
        ClickAction::CloseModal => {
            app.close_modal();
            tracing::debug!("Click: CloseModal - overlay closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use crate::adapters::{MockHttpClient, MockNavigator};
    use crate::capability::Capabilities;
    use crate::config::Config;
    use crate::page::{FaqCategory, Page, SectionKind};
    use crate::widgets::FormField;

    fn app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::with_clients(
            Page::standard(),
            &Config::default(),
            Capabilities::detect(120, true),
            120,
            40,
            Arc::new(MockHttpClient::new()),
            Arc::new(MockNavigator::new()),
            tx,
        )
    }

    #[test]
    fn test_jump_to_scrolls() {
        let mut app = app();
        handle_click_action(&mut app, ClickAction::JumpTo(SectionKind::Newsletter));
        assert!(app.scroll > 0);
    }

    #[test]
    fn test_tab_click_switches_category() {
        let mut app = app();
        assert!(app.faq.is_some());
        handle_click_action(&mut app, ClickAction::SelectFaqTab(FaqCategory::Prijzen));
        assert_eq!(
            app.faq.as_ref().unwrap().active_category,
            FaqCategory::Prijzen
        );
    }

    #[test]
    fn test_toggle_click_expands_and_reflows() {
        let mut app = app();
        let height_before = app.page_height();
        handle_click_action(&mut app, ClickAction::ToggleFaqItem(0));
        assert!(app.faq.as_ref().unwrap().is_expanded(0));
        assert!(app.page_height() > height_before);
    }

    #[test]
    fn test_focus_clicks_move_focus() {
        let mut app = app();
        handle_click_action(&mut app, ClickAction::FocusFaqSearch);
        assert_eq!(app.focus, Focus::FaqSearch);

        handle_click_action(&mut app, ClickAction::FocusField(FormField::Email));
        assert_eq!(app.focus, Focus::Form(FormField::Email));
    }

    #[test]
    fn test_bubble_click_starts_effects() {
        let mut app = app();
        app.tick();
        app.tick();
        assert!(app.bubbles.is_some());

        handle_click_action(&mut app, ClickAction::PressBubble(1));
        let now = app.now_ms();
        assert!(app.bubbles.as_ref().unwrap().effects_active(now));
    }

    #[test]
    fn test_close_modal_click() {
        let mut app = app();
        app.newsletter.as_mut().unwrap().finish_success();
        handle_click_action(&mut app, ClickAction::CloseModal);
        assert!(!app.modal_open());
    }

    #[test]
    fn test_chart_point_click_is_inert() {
        let mut app = app();
        let scroll = app.scroll;
        handle_click_action(&mut app, ClickAction::ChartPoint(3));
        assert_eq!(app.scroll, scroll);
    }
}
