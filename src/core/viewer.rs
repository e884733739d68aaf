//! External document viewer dispatch.
//!
//! Decides whether a file can be handed to the viewer by its extension and launches
//! the viewer process without waiting for it. The [Launcher] trait is the seam the
//! rest of rmtk talks to, so tests can swap in a fake.

use crate::config::Viewer;
use crate::core::error::{EXIT_OK, ViewerLaunchError};

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Extensions (lowercase, without the dot) the viewer can open.
pub const OPENABLE_EXTENSIONS: &[&str] = &["pdf", "djvu", "ps", "epub", "cb", "cbz", "cbr"];

/// Returns true if the file extension is on the viewer allow-list, ignoring case.
pub fn is_openable(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| OPENABLE_EXTENSIONS.contains(&ext.as_str()))
}

/// Fire-and-forget launch of a document viewer.
pub trait Launcher {
    fn launch(&self, path: &Path) -> Result<(), ViewerLaunchError>;
}

/// Launches the configured viewer, preferring the wrapper when it is installed.
#[derive(Debug, Clone)]
pub struct ExternalViewer {
    cmd: String,
    wrapper: Option<String>,
}

impl ExternalViewer {
    pub fn new(cmd: impl Into<String>, wrapper: Option<String>) -> Self {
        Self {
            cmd: cmd.into(),
            wrapper: wrapper.filter(|w| !w.trim().is_empty()),
        }
    }

    pub fn from_config(viewer: &Viewer) -> Self {
        Self::new(viewer.cmd(), viewer.wrapper().map(str::to_string))
    }

    /// Program and arguments used to open `path`.
    ///
    /// Uses `wrapper cmd path` when the wrapper binary is found on `PATH`,
    /// otherwise `cmd path`.
    pub fn command_line(&self, path: &Path) -> (String, Vec<OsString>) {
        match &self.wrapper {
            Some(wrapper) if which::which(wrapper).is_ok() => (
                wrapper.clone(),
                vec![OsString::from(&self.cmd), path.as_os_str().to_os_string()],
            ),
            _ => (self.cmd.clone(), vec![path.as_os_str().to_os_string()]),
        }
    }
}

impl Launcher for ExternalViewer {
    fn launch(&self, path: &Path) -> Result<(), ViewerLaunchError> {
        let (program, args) = self.command_line(path);
        log::info!("launching {} {:?}", program, args);

        let mut cmd = Command::new(&program);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        // The child is never waited on.
        cmd.spawn().map(|_| ()).map_err(|source| ViewerLaunchError {
            program,
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Passes `path` to the launcher once the terminal has been released.
///
/// A launch failure is reported on stderr and in the log, but the browser has
/// already done its job, so the exit status stays [EXIT_OK].
pub fn hand_off(launcher: &dyn Launcher, path: &Path) -> u8 {
    if let Err(e) = launcher.launch(path) {
        log::error!("{e}");
        eprintln!("[rmtk] Error: {e}");
    }
    EXIT_OK
}
