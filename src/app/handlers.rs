//! Key press handlers for rmtk.
//!
//! Implements the [AppState] methods that turn a classified key into a
//! [Navigator](crate::app::Navigator) transition, a directory change or a viewer handoff.

use crate::app::keymap::{Action, NavAction, SearchAction, SystemAction, classify};
use crate::app::state::{AppState, KeypressResult};
use crate::core::{fm, viewer};

use crossterm::event::KeyEvent;
use std::path::Path;

impl AppState {
    /// Handles one key press and reports what the terminal loop should do next.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        self.status = None;

        let Some(action) = classify(&key, self.nav.is_searching(), &mut self.prefix) else {
            return KeypressResult::Continue;
        };

        match action {
            Action::Nav(nav) => self.handle_nav_action(nav),
            Action::Search(search) => {
                self.handle_search_action(search);
                KeypressResult::Consumed
            }
            Action::System(SystemAction::Quit) => KeypressResult::Quit,
        }
    }

    fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        match action {
            NavAction::GoUp => self.nav.move_up(),
            NavAction::GoDown => self.nav.move_down(),
            NavAction::PageUp => self.nav.page_up(),
            NavAction::PageDown => self.nav.page_down(),
            NavAction::GoToTop => self.nav.go_to_top(),
            NavAction::GoToBottom => self.nav.go_to_bottom(),
            NavAction::StartSearch => self.nav.enter_search(),
            NavAction::Open => return self.open_selected(),
        }
        KeypressResult::Consumed
    }

    fn handle_search_action(&mut self, action: SearchAction) {
        match action {
            SearchAction::Push(c) => self.nav.push_search_char(c),
            SearchAction::Pop => self.nav.pop_search_char(),
            SearchAction::Confirm => self.nav.confirm_search(),
            SearchAction::Cancel => self.nav.cancel_search(),
        }
    }

    /// Descends into the selected directory or hands the selected document to the viewer.
    ///
    /// Files the viewer cannot open are ignored. A directory that cannot be listed
    /// leaves the navigator where it was and sets the status message.
    fn open_selected(&mut self) -> KeypressResult {
        let Some(path) = self.nav.selection_path() else {
            return KeypressResult::Continue;
        };

        if fm::is_dir(&path) {
            return self.descend(&path);
        }

        if viewer::is_openable(&path) {
            KeypressResult::Handoff(path)
        } else {
            KeypressResult::Continue
        }
    }

    /// Replaces the navigator with one for `path`.
    ///
    /// When `path` cannot be listed the current navigator stays and the error
    /// becomes the status message.
    pub fn descend(&mut self, path: &Path) -> KeypressResult {
        match self.nav.enter_directory(path) {
            Ok(next) => {
                log::debug!("entered {:?}", next.current_dir());
                self.nav = next;
            }
            Err(e) => {
                log::warn!("{}", e);
                self.status = Some(e.to_string());
            }
        }
        KeypressResult::Consumed
    }
}
