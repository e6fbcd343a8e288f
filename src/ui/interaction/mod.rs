//! Mouse interaction system for the Etalage page.
//!
//! Provides a registry-based system for handling clickable regions in the
//! terminal UI. Section renderers register hit areas while drawing; the event
//! loop hit-tests mouse events against the registry and dispatches the
//! resulting actions to the app.

pub mod click_handler;
pub mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
