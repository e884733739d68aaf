//! Key classification for rmtk.
//!
//! Maps crossterm key events to [Action]s, depending on whether the navigator is
//! in search mode. The `gg` double-tap is tracked by [KeyPrefix], which the caller
//! owns and passes into [classify].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents any action in the browser: navigation, search editing, or system.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    Nav(NavAction),
    Search(SearchAction),
    System(SystemAction),
}

/// Normal mode actions
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavAction {
    GoUp,
    GoDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    StartSearch,
    Open,
}

/// Search mode actions
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SearchAction {
    Push(char),
    Pop,
    Confirm,
    Cancel,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SystemAction {
    Quit,
}

/// Latch for the `gg` sequence.
///
/// Set by a plain `g`, consumed by a second `g`, cleared by any other key.
#[derive(Debug, Default)]
pub struct KeyPrefix {
    g_pressed: bool,
}

impl KeyPrefix {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_g_state(&self) -> bool {
        self.g_pressed
    }

    pub fn cancel(&mut self) {
        self.g_pressed = false;
    }

    /// Feeds a `g` press. Returns true when it completes the sequence.
    fn feed_g(&mut self) -> bool {
        self.g_pressed = !self.g_pressed;
        !self.g_pressed
    }
}

/// Classifies a key press. Returns `None` for keys without a binding and for
/// the first half of `gg`.
pub fn classify(key: &KeyEvent, searching: bool, prefix: &mut KeyPrefix) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        prefix.cancel();
        return Some(Action::System(SystemAction::Quit));
    }

    if searching {
        prefix.cancel();
        return classify_search(key).map(Action::Search);
    }

    if key.code == KeyCode::Char('g') && key.modifiers.is_empty() {
        return prefix.feed_g().then_some(Action::Nav(NavAction::GoToTop));
    }

    prefix.cancel();
    classify_normal(key)
}

fn classify_normal(key: &KeyEvent) -> Option<Action> {
    use NavAction as N;

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Char('u') if ctrl => Action::Nav(N::PageUp),
        KeyCode::Char('d') if ctrl => Action::Nav(N::PageDown),
        _ if ctrl => return None,

        KeyCode::Up | KeyCode::Char('k') => Action::Nav(N::GoUp),
        KeyCode::Down | KeyCode::Char('j') => Action::Nav(N::GoDown),
        KeyCode::PageUp => Action::Nav(N::PageUp),
        KeyCode::PageDown => Action::Nav(N::PageDown),
        KeyCode::Char('G') => Action::Nav(N::GoToBottom),
        KeyCode::Char('/') => Action::Nav(N::StartSearch),
        KeyCode::Enter => Action::Nav(N::Open),
        KeyCode::Char('q') | KeyCode::Esc => Action::System(SystemAction::Quit),
        _ => return None,
    };
    Some(action)
}

fn classify_search(key: &KeyEvent) -> Option<SearchAction> {
    match key.code {
        KeyCode::Esc => Some(SearchAction::Cancel),
        KeyCode::Enter => Some(SearchAction::Confirm),
        KeyCode::Backspace => Some(SearchAction::Pop),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(SearchAction::Push(c))
        }
        _ => None,
    }
}
