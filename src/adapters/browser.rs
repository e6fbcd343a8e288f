//! System browser adapter for the navigation fallback.

use crate::traits::Navigator;

/// Opens URLs with the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for SystemBrowser {
    fn open(&self, url: &str) -> bool {
        match webbrowser::open(url) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%url, %err, "failed to open system browser");
                false
            }
        }
    }
}
