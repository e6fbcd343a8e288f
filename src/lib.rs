//! Etalage TUI - the Etalage marketing page as a terminal app
//!
//! The binary lives in `main.rs`; everything else is exported here so the
//! integration tests can drive a full [`app::App`] against a test backend.

pub mod adapters;
pub mod app;
pub mod capability;
pub mod config;
pub mod loader;
pub mod logging;
pub mod page;
pub mod traits;
pub mod ui;
pub mod visibility;
pub mod widgets;
