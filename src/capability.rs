//! Load-time environment snapshot.
//!
//! The page layer cares about two facts: is the viewport narrow, and does the
//! pointer actually hover. Both are sampled exactly once during startup, before
//! any activation decision is made. Later resizes reflow the layout but never
//! revisit the snapshot, so every widget sees the same answer for the whole run.

/// Widest terminal still considered a narrow viewport, in columns.
pub const NARROW_MAX_COLS: u16 = 95;

/// Environment facts sampled once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Terminal width was at or below [`NARROW_MAX_COLS`] when the app started.
    pub narrow_viewport: bool,
    /// Mouse capture is active, so hover and click interactions will arrive.
    pub hover_capable: bool,
}

impl Capabilities {
    /// Snapshot the environment. `width` is the terminal width in columns,
    /// `mouse` whether mouse capture was actually enabled.
    pub fn detect(width: u16, mouse: bool) -> Self {
        Self {
            narrow_viewport: width <= NARROW_MAX_COLS,
            hover_capable: mouse,
        }
    }

    /// A desktop-like environment: wide terminal with a working pointer.
    pub fn is_desktop(&self) -> bool {
        !self.narrow_viewport && self.hover_capable
    }
}
