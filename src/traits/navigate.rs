//! Navigation trait abstraction.
//!
//! When the in-app newsletter submission fails, the form falls back to the
//! platform's own submission path: the signup URL opens in the system
//! browser. The trait exists so tests can count fallback invocations instead
//! of launching anything.

/// Seam for the full-page navigation fallback.
pub trait Navigator: Send + Sync {
    /// Open `url` with the system handler. Returns `false` when the handler
    /// could not be launched.
    fn open(&self, url: &str) -> bool;
}
