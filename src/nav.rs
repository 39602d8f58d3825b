//! Navigation capability.
//!
//! The browser original redirected with history replacement so the
//! sign-in page could not be re-entered with the back button. `Navigator`
//! keeps that distinction: `replace` swaps the current entry, `push`
//! adds one.

use tracing::info;

pub trait Navigator {
    /// Navigate by replacing the current history entry
    fn replace(&mut self, path: &str);

    /// Navigate by pushing a new history entry
    fn push(&mut self, path: &str);
}

/// Records navigations instead of performing them. Useful for tests and
/// for consumers that drive navigation themselves.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub replaced: Vec<String>,
    pub pushed: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&mut self, path: &str) {
        self.replaced.push(path.to_string());
    }

    fn push(&mut self, path: &str) {
        self.pushed.push(path.to_string());
    }
}

/// Logs navigations; the CLI has no history to move through.
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn replace(&mut self, path: &str) {
        info!(path = path, "navigate (replace)");
    }

    fn push(&mut self, path: &str) {
        info!(path = path, "navigate (push)");
    }
}
