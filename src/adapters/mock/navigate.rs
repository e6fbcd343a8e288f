//! Counting navigator for testing the native-submission fallback.

use std::sync::{Arc, Mutex};

use crate::traits::Navigator;

/// Records every URL it is asked to open instead of launching anything.
///
/// Clones share the recording, so a test can keep one handle while the app
/// owns another.
#[derive(Debug, Clone)]
pub struct MockNavigator {
    opened: Arc<Mutex<Vec<String>>>,
    succeed: bool,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self {
            opened: Arc::new(Mutex::new(Vec::new())),
            succeed: true,
        }
    }

    /// A navigator whose `open` reports failure, for testing the
    /// cannot-launch path.
    pub fn failing() -> Self {
        Self {
            opened: Arc::new(Mutex::new(Vec::new())),
            succeed: false,
        }
    }

    /// URLs opened so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    /// Number of open calls so far.
    pub fn open_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }
}

impl Default for MockNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MockNavigator {
    fn open(&self, url: &str) -> bool {
        self.opened.lock().unwrap().push(url.to_string());
        self.succeed
    }
}
