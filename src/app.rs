//! Application logic for rmtk.
//!
//! - [nav]: the [Navigator] state machine (cursor, viewport, search)
//! - [keymap]: key classification and the `gg` latch
//! - [state]: [AppState], the object the terminal loop drives
//! - handlers: key press handling on [AppState]

mod handlers;
pub mod keymap;
pub mod nav;
pub mod state;

pub use keymap::{Action, KeyPrefix, NavAction, SearchAction, SystemAction};
pub use nav::Navigator;
pub use state::{AppState, KeypressResult};
