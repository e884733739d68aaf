//! Error types for rmtk.
//!
//! Each failure the browser can run into has its own type so callers can decide
//! whether it is fatal (startup) or recoverable (in-session navigation).
//! [Error] wraps the fatal ones for the binary entry point. [ViewerLaunchError]
//! stays out of it, a failed launch is reported after the browser has finished.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Raw mode or the alternate screen could not be set up.
#[derive(Debug, Error)]
#[error("failed to initialize terminal: {source}")]
pub struct TerminalInitError {
    #[source]
    pub source: io::Error,
}

/// A directory could not be listed (permission denied, not found, not a directory).
#[derive(Debug, Error)]
#[error("cannot open directory '{}': {source}", path.display())]
pub struct DirectoryAccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl DirectoryAccessError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// The external viewer process failed to start.
#[derive(Debug, Error)]
#[error("failed to launch '{program}' for '{}': {source}", path.display())]
pub struct ViewerLaunchError {
    pub program: String,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TerminalInit(#[from] TerminalInitError),
    #[error(transparent)]
    DirectoryAccess(#[from] DirectoryAccessError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Process exit status for a normal quit or a completed handoff.
pub const EXIT_OK: u8 = 0;
/// Process exit status for fatal startup errors.
pub const EXIT_FAILURE: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_error_names_the_path() {
        let err = DirectoryAccessError::new(
            "/srv/locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/srv/locked"), "got: {msg}");
        assert!(msg.contains("permission denied"), "got: {msg}");
    }

    #[test]
    fn wrapped_errors_keep_their_message() {
        let inner = TerminalInitError {
            source: io::Error::other("not a tty"),
        };
        let expected = inner.to_string();
        let err: Error = inner.into();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn startup_listing_failure_is_fatal_error() {
        let err: Error = DirectoryAccessError::new(
            "/srv/missing",
            io::Error::from(io::ErrorKind::NotFound),
        )
        .into();
        assert!(matches!(err, Error::DirectoryAccess(ref e) if e.path.ends_with("missing")));
        assert!(err.to_string().contains("/srv/missing"));
    }
}
