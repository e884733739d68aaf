//! Core runtime pieces for rmtk.
//!
//! - [error]: error types and exit codes
//! - [fm]: directory listing
//! - [terminal]: terminal session and event loop
//! - [viewer]: document allow-list and external viewer launch

pub mod error;
pub mod fm;
pub mod terminal;
pub mod viewer;

pub use error::{DirectoryAccessError, Error, TerminalInitError, ViewerLaunchError};
pub use fm::{Entry, list_dir};
pub use terminal::{LoopExit, run_terminal};
pub use viewer::{ExternalViewer, Launcher, hand_off, is_openable};
