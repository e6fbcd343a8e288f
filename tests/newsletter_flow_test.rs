//! Integration tests for the newsletter submission flow.
//!
//! The submit path runs end to end: the app spawns the POST against a
//! scripted HTTP client, the outcome comes back over the message channel, and
//! the handler applies it. A 2xx opens the confirmation overlay; every
//! failure keeps the overlay closed, reports in the status bar, and falls
//! back to the platform's own submission through the (mock) browser.

use std::sync::Arc;

use bytes::Bytes;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use etalage::adapters::mock::MockResponse;
use etalage::adapters::{MockHttpClient, MockNavigator};
use etalage::app::{App, AppMessage, Focus, INVALID_EMAIL_MESSAGE};
use etalage::capability::Capabilities;
use etalage::config::Config;
use etalage::page::Page;
use etalage::traits::{HttpError, Response};
use etalage::widgets::FormField;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

/// The app under test plus the shared handles the assertions read.
struct Harness {
    app: App,
    http: MockHttpClient,
    navigator: MockNavigator,
    rx: mpsc::UnboundedReceiver<AppMessage>,
}

fn harness_with(navigator: MockNavigator) -> Harness {
    let (tx, rx) = mpsc::unbounded_channel();
    let http = MockHttpClient::new();
    let app = App::with_clients(
        Page::standard(),
        &Config::default(),
        Capabilities::detect(WIDTH, true),
        WIDTH,
        HEIGHT,
        Arc::new(http.clone()),
        Arc::new(navigator.clone()),
        tx,
    );
    Harness {
        app,
        http,
        navigator,
        rx,
    }
}

fn harness() -> Harness {
    harness_with(MockNavigator::new())
}

fn fill(app: &mut App, naam: &str, email: &str) {
    let form = app.newsletter.as_mut().unwrap();
    form.naam.set_value(naam);
    form.email.set_value(email);
}

/// Submit and run the round trip until the result is applied.
async fn submit_and_settle(h: &mut Harness) {
    h.app.submit_newsletter();
    let message = h
        .rx
        .recv()
        .await
        .expect("a submission should always produce a result message");
    h.app.handle_message(message);
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

// =============================================================================
// Success Path
// =============================================================================

#[tokio::test]
async fn test_successful_submit_opens_the_confirmation_overlay() {
    let mut h = harness();
    h.http
        .set_default_response(MockResponse::Success(Response::new(200, Bytes::from("ok"))));
    fill(&mut h.app, "Anna de Vries", "anna@devries.nl");

    h.app.submit_newsletter();
    assert!(
        h.app.newsletter.as_ref().unwrap().in_flight,
        "the attempt should be on the wire"
    );

    let message = h.rx.recv().await.unwrap();
    h.app.handle_message(message);

    let form = h.app.newsletter.as_ref().unwrap();
    assert!(form.modal_open, "a 2xx should open the confirmation overlay");
    assert!(form.naam.is_empty(), "success should reset the name field");
    assert!(form.email.is_empty(), "success should reset the email field");
    assert!(!form.in_flight);
    assert_eq!(
        h.navigator.open_count(),
        0,
        "the native fallback must not run on success"
    );
}

#[tokio::test]
async fn test_post_carries_the_urlencoded_form_body() {
    let mut h = harness();
    h.http
        .set_default_response(MockResponse::Success(Response::new(204, Bytes::new())));
    fill(&mut h.app, "Anna de Vries", "anna@devries.nl");

    submit_and_settle(&mut h).await;

    let requests = h.http.get_requests();
    assert_eq!(requests.len(), 1, "exactly one POST should go out");
    let request = &requests[0];
    assert_eq!(request.url, Config::default().newsletter_url);
    assert_eq!(
        request.body,
        "naam=Anna%20de%20Vries&email=anna%40devries.nl"
    );
    assert_eq!(
        request.headers.get("Content-Type").map(String::as_str),
        Some("application/x-www-form-urlencoded")
    );
}

#[tokio::test]
async fn test_enter_in_a_form_field_submits() {
    let mut h = harness();
    h.http
        .set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));
    fill(&mut h.app, "Piet", "piet@bakker.nl");
    h.app.focus = Focus::Form(FormField::Email);

    h.app.handle_key(key(KeyCode::Enter));
    assert!(h.app.newsletter.as_ref().unwrap().in_flight);

    let message = h.rx.recv().await.unwrap();
    h.app.handle_message(message);
    assert!(h.app.modal_open());
}

// =============================================================================
// Failure Paths and the Native Fallback
// =============================================================================

#[tokio::test]
async fn test_server_error_falls_back_to_native_submission() {
    let mut h = harness();
    h.http
        .set_default_response(MockResponse::Success(Response::new(500, Bytes::new())));
    fill(&mut h.app, "Anna de Vries", "anna@devries.nl");

    submit_and_settle(&mut h).await;

    let form = h.app.newsletter.as_ref().unwrap();
    assert!(!form.modal_open, "the overlay never opens on failure");
    assert_eq!(
        form.status.as_deref(),
        Some("Versturen is niet gelukt (status 500).")
    );
    assert_eq!(form.email.value(), "anna@devries.nl", "values are kept for retry");

    assert_eq!(h.navigator.open_count(), 1, "fallback should open exactly once");
    let opened = h.navigator.opened();
    assert!(
        opened[0].starts_with(&format!("{}?naam=", Config::default().newsletter_url)),
        "fallback URL should target the endpoint with query parameters: {}",
        opened[0]
    );
    assert!(opened[0].contains("email=anna%40devries.nl"));
}

#[tokio::test]
async fn test_transport_error_shows_the_dutch_status_message() {
    let mut h = harness();
    h.http.set_default_response(MockResponse::Error(
        HttpError::ConnectionFailed("connection refused".to_string()),
    ));
    fill(&mut h.app, "Anna", "anna@devries.nl");

    submit_and_settle(&mut h).await;

    let form = h.app.newsletter.as_ref().unwrap();
    assert_eq!(form.status.as_deref(), Some("Geen verbinding met de server."));
    assert!(!form.modal_open);
    assert_eq!(h.navigator.open_count(), 1);
}

#[tokio::test]
async fn test_failed_attempt_can_be_retried() {
    let mut h = harness();
    h.http
        .set_default_response(MockResponse::Success(Response::new(503, Bytes::new())));
    fill(&mut h.app, "Anna", "anna@devries.nl");
    submit_and_settle(&mut h).await;
    assert_eq!(h.navigator.open_count(), 1);

    // The server recovers; the kept values submit cleanly.
    h.http
        .set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));
    submit_and_settle(&mut h).await;

    assert!(h.app.modal_open());
    assert_eq!(
        h.navigator.open_count(),
        1,
        "the successful retry must not open the fallback again"
    );
    assert_eq!(h.http.get_requests().len(), 2);
}

#[tokio::test]
async fn test_fallback_launch_failure_is_tolerated() {
    let mut h = harness_with(MockNavigator::failing());
    h.http.set_default_response(MockResponse::Error(HttpError::Timeout(
        "10s".to_string(),
    )));
    fill(&mut h.app, "Anna", "anna@devries.nl");

    submit_and_settle(&mut h).await;

    // The launch failed, but the attempt was made and the status is shown.
    assert_eq!(h.navigator.open_count(), 1);
    assert_eq!(
        h.app.newsletter.as_ref().unwrap().status.as_deref(),
        Some("De server reageert niet, probeer het later opnieuw.")
    );
}

// =============================================================================
// Input Guards
// =============================================================================

#[tokio::test]
async fn test_invalid_email_never_reaches_the_network() {
    let mut h = harness();
    fill(&mut h.app, "Anna", "anna-zonder-apenstaartje");

    h.app.submit_newsletter();

    let form = h.app.newsletter.as_ref().unwrap();
    assert_eq!(form.status.as_deref(), Some(INVALID_EMAIL_MESSAGE));
    assert!(!form.in_flight);
    assert!(h.http.get_requests().is_empty());
    assert!(h.rx.try_recv().is_err(), "no result message should be queued");
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_ignored() {
    let mut h = harness();
    h.http
        .set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));
    fill(&mut h.app, "Anna", "anna@devries.nl");

    h.app.submit_newsletter();
    h.app.submit_newsletter();

    let message = h.rx.recv().await.unwrap();
    h.app.handle_message(message);

    assert_eq!(h.http.get_requests().len(), 1, "one POST for the double submit");
    assert!(h.rx.try_recv().is_err(), "one result for one attempt");
}

// =============================================================================
// Overlay Dismissal
// =============================================================================

#[tokio::test]
async fn test_overlay_closes_on_escape() {
    let mut h = harness();
    h.http
        .set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));
    fill(&mut h.app, "Anna", "anna@devries.nl");
    submit_and_settle(&mut h).await;
    assert!(h.app.modal_open());

    h.app.handle_key(key(KeyCode::Esc));
    assert!(!h.app.modal_open());
}

#[tokio::test]
async fn test_overlay_closes_on_a_click_outside_the_dialog() {
    let mut h = harness();
    h.http
        .set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));
    fill(&mut h.app, "Anna", "anna@devries.nl");
    submit_and_settle(&mut h).await;
    assert!(h.app.modal_open());

    // The dialog is centered; the top-left corner is well outside it.
    h.app.handle_mouse(left_click(0, 0));
    assert!(!h.app.modal_open());
}

#[tokio::test]
async fn test_scroll_keys_are_inert_while_the_overlay_is_open() {
    let mut h = harness();
    h.http
        .set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));
    fill(&mut h.app, "Anna", "anna@devries.nl");
    submit_and_settle(&mut h).await;

    h.app.handle_key(key(KeyCode::Down));
    h.app.handle_key(key(KeyCode::End));
    assert_eq!(h.app.scroll, 0, "the page must not move under the overlay");
    assert!(h.app.modal_open());
}
