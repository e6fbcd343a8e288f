//! Application state and event handling.
//!
//! The page is one tall column of sections; the viewport is the slice of it
//! on screen above the status bar. All interaction state lives here: the
//! scroll offset, the activation bookkeeping, the mounted widgets, keyboard
//! focus, and the hit areas of the last rendered frame. The event loop in
//! `main` feeds keys, mouse events, ticks, and async results into the
//! handlers below and redraws when the dirty flag is set.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::adapters::{ReqwestHttpClient, SystemBrowser};
use crate::capability::Capabilities;
use crate::config::Config;
use crate::loader::{ActivationMode, Feature, LoadPlan, DEFER_TICKS};
use crate::page::{self, Page, SectionKind};
use crate::traits::{Headers, HttpClient, Navigator};
use crate::ui;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::visibility::{visible_fraction, VisibilityWatcher};
use crate::widgets::{
    BubblesWidget, ChartWidget, FaqWidget, FormField, InputField, NewsletterWidget,
};

/// Event-loop tick interval in milliseconds.
pub const TICK_MS: u64 = 16;
/// Rows scrolled per wheel step or arrow key.
const SCROLL_STEP: u16 = 3;

/// Status-bar message for a submit attempt with an unusable address.
pub const INVALID_EMAIL_MESSAGE: &str = "Vul een geldig e-mailadres in.";

/// Where keyboard input currently goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// No field focused; keys scroll the page.
    Page,
    /// The FAQ search box.
    FaqSearch,
    /// One of the newsletter form fields.
    Form(FormField),
}

/// Messages received from async operations.
#[derive(Debug)]
pub enum AppMessage {
    /// The newsletter POST finished. `Err` carries the status-bar message.
    NewsletterResult(Result<(), String>),
}

/// A section placed at its rows in the page column.
#[derive(Debug, Clone, Copy)]
pub struct PlacedSection {
    pub kind: SectionKind,
    pub rect: Rect,
}

/// Main application state.
pub struct App {
    pub page: Page,
    pub caps: Capabilities,
    pub plan: LoadPlan,

    /// Sections stacked top to bottom, page coordinates.
    pub layout: Vec<PlacedSection>,
    pub page_width: u16,
    /// Viewport rows above the status bar.
    pub content_height: u16,
    /// First page row currently on screen.
    pub scroll: u16,

    pub chart: Option<ChartWidget>,
    pub faq: Option<FaqWidget>,
    pub bubbles: Option<BubblesWidget>,
    pub newsletter: Option<NewsletterWidget>,

    /// One-shot watches for lazily activated features.
    pub watcher: VisibilityWatcher<Feature>,
    /// Features waiting for the deferred activation tick.
    deferred: Vec<Feature>,
    /// Features whose activation already ran, successful or not.
    attempted: HashSet<Feature>,

    pub focus: Focus,
    /// Last known cursor position, screen coordinates.
    pub mouse: Option<(u16, u16)>,
    /// Hit areas of the last rendered frame.
    pub hit_registry: HitAreaRegistry,

    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,
    started: Instant,

    /// Endpoint for the newsletter POST.
    pub newsletter_url: String,
    http: Arc<dyn HttpClient>,
    navigator: Arc<dyn Navigator>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Production construction: the standard page with the real HTTP client
    /// and system browser.
    pub fn new(
        config: &Config,
        caps: Capabilities,
        width: u16,
        height: u16,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self::with_clients(
            Page::standard(),
            config,
            caps,
            width,
            height,
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(SystemBrowser::new()),
            message_tx,
        )
    }

    /// Construction with injected IO, used by tests to script the network and
    /// count browser launches.
    #[allow(clippy::too_many_arguments)]
    pub fn with_clients(
        page: Page,
        config: &Config,
        caps: Capabilities,
        width: u16,
        height: u16,
        http: Arc<dyn HttpClient>,
        navigator: Arc<dyn Navigator>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        let plan = LoadPlan::decide(&page, caps);
        let mut app = Self {
            page,
            caps,
            plan,
            layout: Vec::new(),
            page_width: width,
            content_height: height.saturating_sub(1),
            scroll: 0,
            chart: None,
            faq: None,
            bubbles: None,
            newsletter: None,
            watcher: VisibilityWatcher::new(),
            deferred: Vec::new(),
            attempted: HashSet::new(),
            focus: Focus::Page,
            mouse: None,
            hit_registry: HitAreaRegistry::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            started: Instant::now(),
            newsletter_url: config.newsletter_url.clone(),
            http,
            navigator,
            message_tx,
        };
        app.reflow(width);
        app.install_plan();
        app
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Recompute the section stack for `width` columns. The FAQ's height is
    /// content-driven, so this runs again after every filter or accordion
    /// change.
    pub fn reflow(&mut self, width: u16) {
        self.page_width = width;
        self.layout.clear();
        let mut y = 0u16;
        for kind in self.page.sections().to_vec() {
            let rows = match kind {
                SectionKind::Hero => page::HERO_ROWS,
                SectionKind::Chart => page::CHART_ROWS,
                SectionKind::Faq => {
                    ui::faq::section_rows(self.faq.as_ref(), &page::FAQ_CATALOG, width)
                }
                SectionKind::Newsletter => page::NEWSLETTER_ROWS,
                SectionKind::Footer => page::FOOTER_ROWS,
            };
            self.layout.push(PlacedSection {
                kind,
                rect: Rect::new(0, y, width, rows),
            });
            y = y.saturating_add(rows);
        }
        self.scroll = self.scroll.min(self.max_scroll());

        let hero = self.section_rect(SectionKind::Hero);
        if let (Some(bubbles), Some(hero)) = (self.bubbles.as_mut(), hero) {
            bubbles.reposition(ui::hero::container(hero));
        }
    }

    /// Total page rows.
    pub fn page_height(&self) -> u16 {
        self.layout
            .last()
            .map(|placed| placed.rect.y + placed.rect.height)
            .unwrap_or(0)
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height().saturating_sub(self.content_height)
    }

    /// The section's rows in page coordinates, if the page has it.
    pub fn section_rect(&self, kind: SectionKind) -> Option<Rect> {
        self.layout
            .iter()
            .find(|placed| placed.kind == kind)
            .map(|placed| placed.rect)
    }

    /// The on-screen slice of the page, in page coordinates.
    pub fn viewport(&self) -> Rect {
        Rect::new(0, self.scroll, self.page_width, self.content_height)
    }

    /// The content area in screen coordinates.
    pub fn screen(&self) -> Rect {
        Rect::new(0, 0, self.page_width, self.content_height)
    }

    // ========================================================================
    // Activation
    // ========================================================================

    /// Install the activation plan: mount immediates, register lazy watches,
    /// queue deferred features. A lazy target already within reach of the
    /// initial viewport fires right here.
    fn install_plan(&mut self) {
        for feature in [
            Feature::Chart,
            Feature::Faq,
            Feature::Bubbles,
            Feature::Newsletter,
        ] {
            match self.plan.mode(feature) {
                ActivationMode::Immediate => self.activate(feature),
                ActivationMode::Lazy { margin } => {
                    if let Some(rect) = self.section_rect(feature.section()) {
                        self.watcher.register(rect, margin, feature);
                    }
                }
                ActivationMode::Deferred => self.deferred.push(feature),
                ActivationMode::Skip => {
                    debug!(?feature, "activation skipped for this run");
                }
            }
        }
        self.check_visibility();
    }

    /// Mount a feature's widget. Runs at most once per feature per run; a
    /// mount that comes back empty leaves the section static without retry.
    pub fn activate(&mut self, feature: Feature) {
        if !self.attempted.insert(feature) {
            return;
        }
        match feature {
            Feature::Chart => {
                self.chart = ChartWidget::mount(&page::SITE_TRAFFIC);
                if self.chart.is_none() {
                    warn!("chart mount found no data, section stays static");
                }
            }
            Feature::Faq => {
                self.faq = FaqWidget::mount(&page::FAQ_CATALOG);
                if self.faq.is_none() {
                    warn!("faq mount found no entries, section stays static");
                }
            }
            Feature::Bubbles => {
                if let Some(hero) = self.section_rect(SectionKind::Hero) {
                    self.bubbles =
                        BubblesWidget::mount(&page::BUBBLE_LABELS, ui::hero::container(hero));
                }
            }
            Feature::Newsletter => {
                self.newsletter = Some(NewsletterWidget::mount());
            }
        }
        info!(?feature, "feature activated");
        self.reflow(self.page_width);
        self.mark_dirty();
    }

    /// Evaluate lazy watches and the continuous visibility signals against
    /// the current viewport.
    pub fn check_visibility(&mut self) {
        let viewport = self.viewport();
        for feature in self.watcher.check(viewport) {
            debug!(?feature, "section within look-ahead of the viewport");
            self.activate(feature);
        }

        let now = self.now_ms();
        let mut dirty = false;
        let chart_rect = self.section_rect(SectionKind::Chart);
        if let (Some(chart), Some(rect)) = (self.chart.as_mut(), chart_rect) {
            dirty |= chart.update_view(visible_fraction(rect, viewport), now);
        }
        let hero_rect = self.section_rect(SectionKind::Hero);
        if let (Some(bubbles), Some(rect)) = (self.bubbles.as_mut(), hero_rect) {
            dirty |= bubbles.set_visible_fraction(visible_fraction(rect, viewport));
        }
        if dirty {
            self.mark_dirty();
        }
    }

    // ========================================================================
    // Event loop hooks
    // ========================================================================

    /// One event-loop tick: run due deferred activations and keep animations
    /// redrawing while they play.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        if self.tick_count >= DEFER_TICKS && !self.deferred.is_empty() {
            for feature in std::mem::take(&mut self.deferred) {
                debug!(?feature, "deferred activation running");
                self.activate(feature);
            }
            self.check_visibility();
        }

        let now = self.now_ms();
        let mut dirty = false;
        if let Some(bubbles) = self.bubbles.as_mut() {
            dirty |= bubbles.tick(TICK_MS);
            dirty |= bubbles.effects_active(now);
        }
        if let Some(chart) = self.chart.as_ref() {
            dirty |= chart.is_animating(now);
        }
        if dirty {
            self.mark_dirty();
        }
    }

    /// Milliseconds since startup, the clock every animation runs on.
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Terminal resized. The capability snapshot is load-time only, so a
    /// resize reflows the layout but never revisits activation decisions.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.content_height = height.saturating_sub(1);
        self.reflow(width);
        self.mark_dirty();
        self.check_visibility();
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    pub fn scroll_by(&mut self, delta: i32) {
        let next = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs().min(u32::from(u16::MAX)) as u16)
        } else {
            self.scroll
                .saturating_add(delta as u16)
                .min(self.max_scroll())
        };
        if next != self.scroll {
            self.scroll = next;
            self.mark_dirty();
            self.check_visibility();
        }
    }

    /// Scroll the given section to the top of the viewport.
    pub fn jump_to(&mut self, kind: SectionKind) {
        if let Some(rect) = self.section_rect(kind) {
            self.scroll = rect.y.min(self.max_scroll());
            self.mark_dirty();
            self.check_visibility();
        }
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.modal_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
                self.close_modal();
            }
            return;
        }
        match self.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::FaqSearch => self.handle_search_key(key),
            Focus::Form(field) => self.handle_form_key(key, field),
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-i32::from(SCROLL_STEP)),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(i32::from(SCROLL_STEP)),
            KeyCode::PageUp => self.scroll_by(-i32::from(self.content_height)),
            KeyCode::PageDown => self.scroll_by(i32::from(self.content_height)),
            KeyCode::Home => {
                self.scroll = 0;
                self.mark_dirty();
                self.check_visibility();
            }
            KeyCode::End => {
                self.scroll = self.max_scroll();
                self.mark_dirty();
                self.check_visibility();
            }
            KeyCode::Tab => {
                if self.newsletter.is_some() {
                    self.focus = Focus::Form(FormField::Naam);
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.focus = Focus::Page;
                self.mark_dirty();
            }
            _ => {
                let Some(faq) = self.faq.as_mut() else {
                    self.focus = Focus::Page;
                    return;
                };
                let edited = edit_field(&mut faq.search, key);
                if edited {
                    // The filter changes the item list, and with it the page
                    // height and every section position below the FAQ.
                    self.reflow(self.page_width);
                    self.mark_dirty();
                    self.check_visibility();
                }
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, field: FormField) {
        match key.code {
            KeyCode::Esc => {
                self.focus = Focus::Page;
                self.mark_dirty();
            }
            KeyCode::Tab => {
                let next = match field {
                    FormField::Naam => FormField::Email,
                    FormField::Email => FormField::Naam,
                };
                self.focus = Focus::Form(next);
                self.mark_dirty();
            }
            KeyCode::Enter => self.submit_newsletter(),
            _ => {
                let Some(form) = self.newsletter.as_mut() else {
                    self.focus = Focus::Page;
                    return;
                };
                if edit_field(form.field_mut(field), key) {
                    self.mark_dirty();
                }
            }
        }
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Moved => {
                self.mouse = Some((event.column, event.row));
                if self.hit_registry.update_hover(event.column, event.row) {
                    self.mark_dirty();
                }
                self.update_chart_engagement();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.mouse = Some((event.column, event.row));
                self.handle_click(event.column, event.row);
            }
            MouseEventKind::ScrollUp => self.scroll_by(-i32::from(SCROLL_STEP)),
            MouseEventKind::ScrollDown => self.scroll_by(i32::from(SCROLL_STEP)),
            _ => {}
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        if self.modal_open() {
            // Only the close button acts; anywhere outside the dialog
            // dismisses. Page areas underneath stay inert.
            let action = self.hit_registry.hit_test(x, y);
            if action == Some(ClickAction::CloseModal) {
                ui::interaction::handle_click_action(self, ClickAction::CloseModal);
            } else {
                let dialog = ui::modal::dialog_rect(self.screen());
                let inside = x >= dialog.x
                    && x < dialog.x + dialog.width
                    && y >= dialog.y
                    && y < dialog.y + dialog.height;
                if !inside {
                    self.close_modal();
                }
            }
            return;
        }

        if let Some(action) = self.hit_registry.hit_test(x, y) {
            ui::interaction::handle_click_action(self, action);
        } else if self.focus != Focus::Page {
            // A click on plain page drops field focus.
            self.focus = Focus::Page;
            self.mark_dirty();
        }
    }

    /// Track whether the cursor is inside the chart's on-screen rows.
    fn update_chart_engagement(&mut self) {
        let Some((mx, my)) = self.mouse else {
            return;
        };
        let chart_rect = self.section_rect(SectionKind::Chart);
        let scroll = self.scroll;
        let content_height = self.content_height;
        let mut dirty = false;
        if let (Some(chart), Some(rect)) = (self.chart.as_mut(), chart_rect) {
            let top = i32::from(rect.y) - i32::from(scroll);
            let bottom = top + i32::from(rect.height);
            let inside = mx >= rect.x
                && mx < rect.x + rect.width
                && i32::from(my) >= top.max(0)
                && i32::from(my) < bottom.min(i32::from(content_height));
            dirty = chart.set_engaged(inside);
        }
        if dirty {
            self.mark_dirty();
        }
    }

    // ========================================================================
    // Newsletter submission
    // ========================================================================

    pub fn modal_open(&self) -> bool {
        self.newsletter.as_ref().is_some_and(|form| form.modal_open)
    }

    pub fn close_modal(&mut self) {
        if let Some(form) = self.newsletter.as_mut() {
            form.close_modal();
        }
        self.mark_dirty();
    }

    /// Kick off the async POST. Invalid input only sets the status message;
    /// an attempt already on the wire is left alone.
    pub fn submit_newsletter(&mut self) {
        let Some(form) = self.newsletter.as_mut() else {
            return;
        };
        if form.in_flight {
            return;
        }
        if !form.email_valid() {
            form.status = Some(INVALID_EMAIL_MESSAGE.to_string());
            self.mark_dirty();
            return;
        }
        form.begin_submit();
        let body = form.form_body();
        let url = self.newsletter_url.clone();
        let http = Arc::clone(&self.http);
        let tx = self.message_tx.clone();
        info!(%url, "newsletter submit started");
        self.mark_dirty();

        tokio::spawn(async move {
            let mut headers = Headers::new();
            headers.insert(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            );
            let result = match http.post(&url, &body, &headers).await {
                Ok(response) if response.is_success() => Ok(()),
                Ok(response) => Err(format!(
                    "Versturen is niet gelukt (status {}).",
                    response.status
                )),
                Err(err) => Err(err.user_message().to_string()),
            };
            let _ = tx.send(AppMessage::NewsletterResult(result));
        });
    }

    /// Apply an async result to the app state.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::NewsletterResult(result) => {
                let fallback = self
                    .newsletter
                    .as_ref()
                    .map(|form| form.fallback_url(&self.newsletter_url));
                let Some(form) = self.newsletter.as_mut() else {
                    return;
                };
                match result {
                    Ok(()) => {
                        info!("newsletter submission confirmed");
                        form.finish_success();
                    }
                    Err(status_message) => {
                        warn!(%status_message, "newsletter submission failed, using the native fallback");
                        form.finish_failure(status_message);
                        if let Some(url) = fallback {
                            if !self.navigator.open(&url) {
                                warn!("native fallback could not be launched");
                            }
                        }
                    }
                }
                self.mark_dirty();
            }
        }
    }
}

/// Route an editing key into a text field. Returns `true` when the field
/// consumed it.
fn edit_field(field: &mut InputField, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => {
            field.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            field.backspace();
            true
        }
        KeyCode::Delete => {
            field.delete_char();
            true
        }
        KeyCode::Left => {
            field.move_left();
            true
        }
        KeyCode::Right => {
            field.move_right();
            true
        }
        KeyCode::Home => {
            field.move_home();
            true
        }
        KeyCode::End => {
            field.move_end();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockNavigator};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app(width: u16, height: u16, mouse: bool) -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::with_clients(
            Page::standard(),
            &Config::default(),
            Capabilities::detect(width, mouse),
            width,
            height,
            Arc::new(MockHttpClient::new()),
            Arc::new(MockNavigator::new()),
            tx,
        )
    }

    #[test]
    fn test_layout_stacks_sections_without_gaps() {
        let app = test_app(120, 40, true);
        let mut y = 0;
        for placed in &app.layout {
            assert_eq!(placed.rect.y, y, "{:?} misplaced", placed.kind);
            y += placed.rect.height;
        }
        assert_eq!(app.page_height(), y);
        assert_eq!(app.layout.len(), 5);
    }

    #[test]
    fn test_wide_viewport_mounts_chart_and_newsletter_immediately() {
        let app = test_app(120, 40, true);
        assert!(app.chart.is_some());
        assert!(app.newsletter.is_some());
        // Bubbles wait for the deferred tick.
        assert!(app.bubbles.is_none());
    }

    #[test]
    fn test_deferred_bubbles_mount_on_second_tick() {
        let mut app = test_app(120, 40, true);
        app.tick();
        assert!(app.bubbles.is_none());
        app.tick();
        assert!(app.bubbles.is_some());
    }

    #[test]
    fn test_bubbles_skipped_without_hover() {
        let mut app = test_app(120, 40, false);
        app.tick();
        app.tick();
        app.tick();
        assert!(app.bubbles.is_none());
    }

    #[test]
    fn test_narrow_chart_waits_for_scroll() {
        // Viewport of 2 content rows: the chart at row 21 is out of the
        // 19-row look-ahead until the page scrolls.
        let mut app = test_app(80, 3, true);
        assert!(app.chart.is_none());

        app.scroll_by(3);
        assert!(app.chart.is_some());
    }

    #[test]
    fn test_faq_mounts_when_section_comes_in_reach() {
        let mut app = test_app(120, 12, true);
        assert!(app.faq.is_none());

        app.scroll_by(3);
        assert!(app.faq.is_some());
    }

    #[test]
    fn test_activation_runs_at_most_once() {
        let mut app = test_app(120, 40, true);
        let faq_before = app.faq.as_mut().map(|faq| {
            faq.toggle(0);
            faq.is_expanded(0)
        });
        app.activate(Feature::Faq);
        // A second activate must not replace the widget and lose state.
        if faq_before == Some(true) {
            assert!(app.faq.as_ref().is_some_and(|faq| faq.is_expanded(0)));
        }
        app.activate(Feature::Chart);
        app.activate(Feature::Chart);
        assert!(app.chart.is_some());
    }

    #[test]
    fn test_jump_to_scrolls_section_into_view() {
        let mut app = test_app(120, 20, true);
        app.jump_to(SectionKind::Newsletter);
        let rect = app.section_rect(SectionKind::Newsletter).unwrap();
        assert_eq!(app.scroll, rect.y.min(app.max_scroll()));
    }

    #[test]
    fn test_scroll_clamps_to_page() {
        let mut app = test_app(120, 20, true);
        app.scroll_by(10_000);
        assert_eq!(app.scroll, app.max_scroll());
        app.scroll_by(-10_000);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_resize_keeps_scroll_in_bounds() {
        let mut app = test_app(120, 20, true);
        app.scroll_by(10_000);
        let before = app.scroll;
        app.on_resize(120, 60);
        assert!(app.scroll <= app.max_scroll());
        assert!(app.scroll <= before);
    }

    #[test]
    fn test_form_typing_reaches_fields() {
        let mut app = test_app(120, 40, true);
        app.focus = Focus::Form(FormField::Email);
        for c in "anna@devries.nl".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(
            app.newsletter.as_ref().unwrap().email.value(),
            "anna@devries.nl"
        );

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Form(FormField::Naam));
    }

    #[test]
    fn test_q_types_into_focused_field_instead_of_quitting() {
        let mut app = test_app(120, 40, true);
        app.focus = Focus::Form(FormField::Naam);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.newsletter.as_ref().unwrap().naam.value(), "q");
    }

    #[test]
    fn test_submit_with_invalid_email_sets_status() {
        let mut app = test_app(120, 40, true);
        app.submit_newsletter();
        let form = app.newsletter.as_ref().unwrap();
        assert!(!form.in_flight);
        assert_eq!(form.status.as_deref(), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_search_typing_reflows_page() {
        let mut app = test_app(120, 40, true);
        // FAQ fires during startup on a 39-row viewport.
        assert!(app.faq.is_some());
        let height_before = app.page_height();

        app.focus = Focus::FaqSearch;
        for c in "korting".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert!(app.faq.as_ref().unwrap().searching());
        assert_ne!(app.page_height(), height_before);
    }

    #[test]
    fn test_modal_keys_close_it() {
        let mut app = test_app(120, 40, true);
        app.newsletter.as_mut().unwrap().finish_success();
        assert!(app.modal_open());

        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.modal_open());

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.modal_open());
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = test_app(120, 40, true);
        app.focus = Focus::Form(FormField::Naam);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = test_app(120, 20, true);
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.scroll, 3);
    }

    #[test]
    fn test_absent_sections_never_activate() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::with_clients(
            Page::with_sections(&[SectionKind::Hero, SectionKind::Footer]),
            &Config::default(),
            Capabilities::detect(120, true),
            120,
            40,
            Arc::new(MockHttpClient::new()),
            Arc::new(MockNavigator::new()),
            tx,
        );
        app.tick();
        app.tick();
        app.scroll_by(100);
        assert!(app.chart.is_none());
        assert!(app.faq.is_none());
        assert!(app.newsletter.is_none());
        // Hero is present and the viewport hovers, so bubbles still mount.
        assert!(app.bubbles.is_some());
    }
}
