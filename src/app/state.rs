//! Application state for rmtk.
//!
//! [AppState] bundles the [Navigator] with the input dispatcher state (the `gg`
//! latch) and the one-line status message shown after a failed action. It is the
//! object the terminal loop feeds key events into and renders from.

use crate::app::keymap::KeyPrefix;
use crate::app::nav::Navigator;

use std::path::PathBuf;

/// Outcome of a single key press, consumed by the terminal loop.
#[derive(Debug, Clone, PartialEq)]
pub enum KeypressResult {
    /// No binding matched, nothing changed.
    Continue,
    /// The key changed state and the screen should be redrawn.
    Consumed,
    Quit,
    /// Leave the loop, restore the terminal and open this file in the viewer.
    Handoff(PathBuf),
}

pub struct AppState {
    pub(super) nav: Navigator,
    pub(super) prefix: KeyPrefix,
    pub(super) status: Option<String>,
}

impl AppState {
    pub fn new(nav: Navigator) -> Self {
        Self {
            nav,
            prefix: KeyPrefix::new(),
            status: None,
        }
    }

    // Getters / accessors

    #[inline]
    pub fn nav(&self) -> &Navigator {
        &self.nav
    }

    #[inline]
    pub fn nav_mut(&mut self) -> &mut Navigator {
        &mut self.nav
    }

    /// Message from the last failed action, cleared by the next key press.
    #[inline]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
